//! Create Category

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategoryGateway};
use crate::error::AppResult;

/// Command to create a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}

pub struct CreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl CreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    /// Validate and persist a new category.
    ///
    /// Every rule violation is reported in one failure.
    pub async fn execute(&self, command: CreateCategoryCommand) -> AppResult<CreateCategoryOutput> {
        let category = Category::new_category(
            command.name.as_deref(),
            command.description.as_deref(),
            command.is_active,
        )?;

        let category = self.gateway.create(category).await?;
        tracing::info!(category_id = %category.id(), "Category created");

        Ok(CreateCategoryOutput::from(&category))
    }
}
