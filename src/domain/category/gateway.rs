//! Category persistence port

use async_trait::async_trait;

use crate::domain::{CategoryId, GatewayError, Pagination, SearchQuery};

use super::Category;

#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: Category) -> Result<Category, GatewayError>;

    async fn update(&self, category: Category) -> Result<Category, GatewayError>;

    /// Remove a category. Absent ids are not an error.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError>;

    /// Subset of `ids` that currently exist.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError>;
}
