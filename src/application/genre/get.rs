//! Get Genre by id

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::genre::GENRE;
use crate::domain::{DomainError, Genre, GenreGateway, GenreId};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    #[serde(rename = "categories_id")]
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre.categories().iter().map(ToString::to_string).collect(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct GetGenreByIdUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl GetGenreByIdUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &str) -> AppResult<GenreOutput> {
        let id = GenreId::from(id);
        let genre = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(GENRE, &id))?;

        Ok(GenreOutput::from(genre))
    }
}
