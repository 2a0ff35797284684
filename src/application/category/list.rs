//! List Categories

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategoryGateway, Pagination, SearchQuery};
use crate::error::AppResult;

/// Category row in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub struct ListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: SearchQuery) -> AppResult<Pagination<CategoryListOutput>> {
        let page = self.gateway.find_all(&query).await?;
        Ok(page.map(CategoryListOutput::from))
    }
}
