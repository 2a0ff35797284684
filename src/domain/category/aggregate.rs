//! Category Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::clock;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::domain::{CategoryId, DomainError};

use super::CategoryValidator;

/// Aggregate type name used in failure messages
pub const CATEGORY: &str = "Category";

/// Category Aggregate
///
/// Invariant: `active == true` exactly when `deleted_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category with a fresh id.
    pub fn new_category(
        name: Option<&str>,
        description: Option<&str>,
        active: bool,
    ) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        CategoryValidator::for_input(name, &mut notification).validate()?;

        let Some(name) = name.filter(|_| !notification.has_errors()) else {
            return Err(notification.into_failure(format!("Could not create Aggregate {}", CATEGORY)));
        };

        let now = clock::now();
        Ok(Self {
            id: CategoryId::unique(),
            name: name.trim().to_string(),
            description: description.map(str::to_string),
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        })
    }

    /// Rebuild a category from stored values. No validation.
    pub fn with(
        id: CategoryId,
        name: String,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Replace name, description and active flag.
    ///
    /// Consumes the category so an invalid update never leaves a
    /// half-applied instance behind.
    pub fn update(
        mut self,
        name: Option<&str>,
        description: Option<&str>,
        active: bool,
    ) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        CategoryValidator::for_input(name, &mut notification).validate()?;

        let Some(name) = name.filter(|_| !notification.has_errors()) else {
            return Err(notification.into_failure(format!("Could not update Aggregate {}", CATEGORY)));
        };

        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.trim().to_string();
        self.description = description.map(str::to_string);
        self.updated_at = clock::now();
        Ok(self)
    }

    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = clock::now();
    }

    /// Mark inactive. Keeps an existing `deleted_at`.
    pub fn deactivate(&mut self) {
        let now = clock::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
    }

    /// Run the category rules against `handler`.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
