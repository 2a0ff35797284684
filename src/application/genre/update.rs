//! Update Genre

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::genre::GENRE;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::domain::{CategoryGateway, DomainError, GenreGateway, GenreId};
use crate::error::AppResult;

use super::{to_category_ids, validate_categories};

/// Command to update a genre. The category list replaces the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            is_active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreOutput {
    pub id: String,
}

pub struct UpdateGenreUseCase {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
}

impl UpdateGenreUseCase {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
    ) -> Self {
        Self {
            category_gateway,
            genre_gateway,
        }
    }

    pub async fn execute(&self, command: UpdateGenreCommand) -> AppResult<UpdateGenreOutput> {
        let id = GenreId::from(command.id);
        let genre = self
            .genre_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(GENRE, &id))?;

        let categories = to_category_ids(command.categories);

        let mut notification = Notification::create();
        let references = validate_categories(self.category_gateway.as_ref(), &categories).await?;
        notification.append_all(&references)?;

        let updated = notification
            .validate(|| genre.update(command.name.as_deref(), command.is_active, categories))?;

        let genre = match updated {
            Some(genre) if !notification.has_errors() => genre,
            _ => {
                return Err(notification
                    .into_failure(format!("Could not update Aggregate {}", GENRE))
                    .into())
            }
        };

        let genre = self.genre_gateway.update(genre).await?;
        tracing::info!(genre_id = %genre.id(), "Genre updated");

        Ok(UpdateGenreOutput {
            id: genre.id().to_string(),
        })
    }
}
