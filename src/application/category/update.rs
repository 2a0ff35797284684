//! Update Category

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::category::CATEGORY;
use crate::domain::{Category, CategoryGateway, CategoryId, DomainError};
use crate::error::AppResult;

/// Command to update a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
        }
    }
}

pub struct UpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl UpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, command: UpdateCategoryCommand) -> AppResult<UpdateCategoryOutput> {
        let id = CategoryId::from(command.id);
        let category = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CATEGORY, &id))?;

        let category = category.update(
            command.name.as_deref(),
            command.description.as_deref(),
            command.is_active,
        )?;

        let category = self.gateway.update(category).await?;
        tracing::info!(category_id = %category.id(), "Category updated");

        Ok(UpdateCategoryOutput::from(&category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{Calls, FakeCategoryGateway};

    #[tokio::test]
    async fn test_update_category() {
        let gateway = Arc::new(FakeCategoryGateway::default());
        let existing = gateway
            .seed(Category::new_category(Some("Film"), None, true).unwrap())
            .await;
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let output = use_case
            .execute(UpdateCategoryCommand::new(
                existing.id().value(),
                Some("Filmes".to_string()),
                Some("A categoria mais assistida".to_string()),
                false,
            ))
            .await
            .unwrap();

        assert_eq!(output.id, existing.id().value());
        assert_eq!(Calls::count(&gateway.calls.update), 1);

        let stored = gateway.find_by_id(existing.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Filmes");
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
        assert_eq!(stored.created_at(), existing.created_at());
    }

    #[tokio::test]
    async fn test_update_invalid_name_skips_gateway_update() {
        let gateway = Arc::new(FakeCategoryGateway::default());
        let existing = gateway
            .seed(Category::new_category(Some("Filmes"), None, true).unwrap())
            .await;
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let err = use_case
            .execute(UpdateCategoryCommand::new(existing.id().value(), None, None, true))
            .await
            .unwrap_err();

        let domain = err.as_domain().unwrap();
        assert_eq!(domain.errors().len(), 1);
        assert_eq!(domain.errors()[0].message, "'name' should not be null");
        assert_eq!(Calls::count(&gateway.calls.update), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let gateway = Arc::new(FakeCategoryGateway::default());
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let err = use_case
            .execute(UpdateCategoryCommand::new("123", Some("Filmes".to_string()), None, true))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Category with ID 123 was not found");
        assert_eq!(Calls::count(&gateway.calls.update), 0);
    }
}
