//! Genre persistence port

use async_trait::async_trait;

use crate::domain::{GatewayError, GenreId, Pagination, SearchQuery};

use super::Genre;

#[async_trait]
pub trait GenreGateway: Send + Sync {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError>;

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError>;

    /// Remove a genre. Absent ids are not an error.
    async fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError>;

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError>;
}
