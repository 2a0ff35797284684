//! CastMember Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::clock;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::domain::{CastMemberId, DomainError};

use super::{CastMemberType, CastMemberValidator};

/// Aggregate type name used in failure messages
pub const CAST_MEMBER: &str = "CastMember";

/// CastMember Aggregate. No soft delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    #[serde(rename = "type")]
    kind: CastMemberType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CastMember {
    /// Create a new cast member with a fresh id.
    ///
    /// Name and type are checked independently, so both can be reported.
    pub fn new_member(
        name: Option<&str>,
        kind: Option<CastMemberType>,
    ) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        CastMemberValidator::for_input(name, kind, &mut notification).validate()?;

        match (name, kind) {
            (Some(name), Some(kind)) if !notification.has_errors() => {
                let now = clock::now();
                Ok(Self {
                    id: CastMemberId::unique(),
                    name: name.trim().to_string(),
                    kind,
                    created_at: now,
                    updated_at: now,
                })
            }
            _ => Err(notification.into_failure(format!("Could not create Aggregate {}", CAST_MEMBER))),
        }
    }

    /// Rebuild a cast member from stored values. No validation.
    pub fn with(
        id: CastMemberId,
        name: String,
        kind: CastMemberType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            created_at,
            updated_at,
        }
    }

    pub fn update(
        mut self,
        name: Option<&str>,
        kind: Option<CastMemberType>,
    ) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        CastMemberValidator::for_input(name, kind, &mut notification).validate()?;

        match (name, kind) {
            (Some(name), Some(kind)) if !notification.has_errors() => {
                self.name = name.trim().to_string();
                self.kind = kind;
                self.updated_at = clock::now();
                Ok(self)
            }
            _ => Err(notification.into_failure(format!("Could not update Aggregate {}", CAST_MEMBER))),
        }
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        CastMemberValidator::new(self, handler).validate()
    }

    pub fn id(&self) -> &CastMemberId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CastMemberType {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(err: &DomainError) -> Vec<&str> {
        err.errors().iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_new_member() {
        let member = CastMember::new_member(Some("Vin Diesel"), Some(CastMemberType::Actor)).unwrap();

        assert_eq!(member.name(), "Vin Diesel");
        assert_eq!(member.kind(), CastMemberType::Actor);
        assert_eq!(member.created_at(), member.updated_at());
    }

    #[test]
    fn test_new_members_get_distinct_ids() {
        let a = CastMember::new_member(Some("Vin Diesel"), Some(CastMemberType::Actor)).unwrap();
        let b = CastMember::new_member(Some("Vin Diesel"), Some(CastMemberType::Actor)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_member_invalid_name() {
        let cases = [
            (None, "'name' should not be null"),
            (Some(""), "'name' should not be empty"),
            (Some("Vi"), "'name' must be between 3 and 255 characters"),
        ];
        let too_long = "a".repeat(256);

        for (name, expected) in cases {
            let err = CastMember::new_member(name, Some(CastMemberType::Director)).unwrap_err();
            assert_eq!(messages(&err), vec![expected]);
        }

        let err = CastMember::new_member(Some(&too_long), Some(CastMemberType::Director)).unwrap_err();
        assert_eq!(messages(&err), vec!["'name' must be between 3 and 255 characters"]);
    }

    #[test]
    fn test_new_member_null_type() {
        let err = CastMember::new_member(Some("Vin Diesel"), None).unwrap_err();

        assert_eq!(err.to_string(), "Could not create Aggregate CastMember");
        assert_eq!(messages(&err), vec!["'type' should not be null"]);
    }

    #[test]
    fn test_new_member_reports_name_and_type_together() {
        let err = CastMember::new_member(Some(" "), None).unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["'name' should not be empty", "'type' should not be null"]
        );
    }

    #[test]
    fn test_update_member() {
        let member = CastMember::new_member(Some("vind"), Some(CastMemberType::Director)).unwrap();
        let id = member.id().clone();
        let created_at = member.created_at();

        let updated = member
            .update(Some("Vin Diesel"), Some(CastMemberType::Actor))
            .unwrap();

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.name(), "Vin Diesel");
        assert_eq!(updated.kind(), CastMemberType::Actor);
        assert_eq!(updated.created_at(), created_at);
        assert!(updated.updated_at() >= created_at);
    }

    #[test]
    fn test_update_member_null_name() {
        let member = CastMember::new_member(Some("Vin Diesel"), Some(CastMemberType::Actor)).unwrap();
        let err = member.update(None, Some(CastMemberType::Actor)).unwrap_err();

        assert_eq!(err.to_string(), "Could not update Aggregate CastMember");
        assert_eq!(messages(&err), vec!["'name' should not be null"]);
    }

    #[test]
    fn test_name_is_stored_trimmed() {
        let padded = format!("  {}  ", "a".repeat(255));
        let member = CastMember::new_member(Some(&padded), Some(CastMemberType::Actor)).unwrap();
        assert_eq!(member.name().chars().count(), 255);

        let updated = member
            .update(Some(" Vin Diesel "), Some(CastMemberType::Director))
            .unwrap();
        assert_eq!(updated.name(), "Vin Diesel");
    }
}
