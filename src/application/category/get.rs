//! Get Category by id

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::CATEGORY;
use crate::domain::{Category, CategoryGateway, CategoryId, DomainError};
use crate::error::AppResult;

/// Full category projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub struct GetCategoryByIdUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &str) -> AppResult<CategoryOutput> {
        let id = CategoryId::from(id);
        let category = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CATEGORY, &id))?;

        Ok(CategoryOutput::from(category))
    }
}
