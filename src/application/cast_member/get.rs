//! Get CastMember by id

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cast_member::CAST_MEMBER;
use crate::domain::{CastMember, CastMemberGateway, CastMemberId, CastMemberType, DomainError};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}

pub struct GetCastMemberByIdUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl GetCastMemberByIdUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &str) -> AppResult<CastMemberOutput> {
        let id = CastMemberId::from(id);
        let member = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CAST_MEMBER, &id))?;

        Ok(CastMemberOutput::from(member))
    }
}
