use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Category, CategoryGateway, CategoryId, GatewayError, Pagination, SearchQuery,
};

use super::{contains_ignore_case, paginate};

#[derive(Debug, Default)]
pub struct InMemoryCategoryGateway {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        self.categories
            .write()
            .await
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        if let Some(stored) = self.categories.write().await.get_mut(category.id()) {
            *stored = category.clone();
        }
        Ok(category)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        self.categories.write().await.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        let snapshot: Vec<Category> = self.categories.read().await.values().cloned().collect();

        Ok(paginate(
            snapshot,
            query,
            |category, terms| {
                contains_ignore_case(category.name(), terms)
                    || category
                        .description()
                        .is_some_and(|d| contains_ignore_case(d, terms))
            },
            |a, b, sort| {
                let ordering = match sort {
                    "createdAt" | "created_at" => a.created_at().cmp(&b.created_at()),
                    "description" => a.description().cmp(&b.description()),
                    _ => a.name().cmp(b.name()),
                };
                ordering.then_with(|| a.id().cmp(b.id()))
            },
        ))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        let categories = self.categories.read().await;
        Ok(ids
            .iter()
            .filter(|id| categories.contains_key(*id))
            .cloned()
            .collect())
    }
}
