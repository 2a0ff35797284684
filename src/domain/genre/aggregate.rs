//! Genre Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::clock;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::domain::{CategoryId, DomainError, GenreId};

use super::GenreValidator;

/// Aggregate type name used in failure messages
pub const GENRE: &str = "Genre";

/// Genre Aggregate
///
/// Invariant: `active == true` exactly when `deleted_at` is `None`.
/// Category references are kept in insertion order without duplicates;
/// whether they exist is checked by the use cases, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    /// Create a new genre with a fresh id and no categories.
    pub fn new_genre(name: Option<&str>, active: bool) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        GenreValidator::for_input(name, &mut notification).validate()?;

        let Some(name) = name.filter(|_| !notification.has_errors()) else {
            return Err(notification.into_failure(format!("Could not create Aggregate {}", GENRE)));
        };

        let now = clock::now();
        Ok(Self {
            id: GenreId::unique(),
            name: name.trim().to_string(),
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        })
    }

    /// Rebuild a genre from stored values. No validation.
    pub fn with(
        id: GenreId,
        name: String,
        active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            active,
            categories,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Replace name, active flag and the whole category list.
    pub fn update(
        mut self,
        name: Option<&str>,
        active: bool,
        categories: Vec<CategoryId>,
    ) -> Result<Self, DomainError> {
        let mut notification = Notification::create();
        GenreValidator::for_input(name, &mut notification).validate()?;

        let Some(name) = name.filter(|_| !notification.has_errors()) else {
            return Err(notification.into_failure(format!("Could not update Aggregate {}", GENRE)));
        };

        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.trim().to_string();
        self.categories.clear();
        self.add_categories(categories);
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

    /// Append a category reference unless already present.
    pub fn add_category(&mut self, id: CategoryId) {
        if self.categories.contains(&id) {
            return;
        }
        self.categories.push(id);
        self.updated_at = clock::now();
    }

    pub fn add_categories(&mut self, ids: impl IntoIterator<Item = CategoryId>) {
        for id in ids {
            self.add_category(id);
        }
    }

    pub fn remove_category(&mut self, id: &CategoryId) {
        let before = self.categories.len();
        self.categories.retain(|existing| existing != id);
        if self.categories.len() != before {
            self.updated_at = clock::now();
        }
    }

    /// Run the genre rules against `handler`.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        GenreValidator::new(self, handler).validate()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &GenreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
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

// Category order does not take part in equality.
impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.active == other.active
            && self.created_at == other.created_at
            && self.updated_at == other.updated_at
            && self.deleted_at == other.deleted_at
            && sorted_categories(&self.categories) == sorted_categories(&other.categories)
    }
}

fn sorted_categories(ids: &[CategoryId]) -> Vec<&CategoryId> {
    let mut sorted: Vec<&CategoryId> = ids.iter().collect();
    sorted.sort();
    sorted
}

impl Eq for Genre {}
