//! List Genres

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Genre, GenreGateway, Pagination, SearchQuery};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreListOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    #[serde(rename = "categories_id")]
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre.categories().iter().map(ToString::to_string).collect(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct ListGenresUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl ListGenresUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: SearchQuery) -> AppResult<Pagination<GenreListOutput>> {
        let page = self.gateway.find_all(&query).await?;
        Ok(page.map(GenreListOutput::from))
    }
}
