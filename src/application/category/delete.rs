//! Delete Category

use std::sync::Arc;

use crate::domain::{CategoryGateway, CategoryId};
use crate::error::AppResult;

pub struct DeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    /// Delete by id. Unknown ids succeed.
    pub async fn execute(&self, id: &str) -> AppResult<()> {
        let id = CategoryId::from(id);
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
