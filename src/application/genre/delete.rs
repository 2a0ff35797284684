//! Delete Genre

use std::sync::Arc;

use crate::domain::{GenreGateway, GenreId};
use crate::error::AppResult;

pub struct DeleteGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DeleteGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &str) -> AppResult<()> {
        let id = GenreId::from(id);
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(genre_id = %id, "Genre deleted");
        Ok(())
    }
}
