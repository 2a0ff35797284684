mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase};
pub use delete::DeleteGenreUseCase;
pub use get::{GenreOutput, GetGenreByIdUseCase};
pub use list::{GenreListOutput, ListGenresUseCase};
pub use update::{UpdateGenreCommand, UpdateGenreOutput, UpdateGenreUseCase};

use crate::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::domain::{CategoryGateway, CategoryId};
use crate::error::AppResult;

/// Turn raw ids into category ids, dropping repeats but keeping order.
fn to_category_ids(raw: Vec<String>) -> Vec<CategoryId> {
    let mut ids: Vec<CategoryId> = Vec::with_capacity(raw.len());
    for value in raw {
        let id = CategoryId::from(value);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Check that every referenced category exists.
///
/// Missing ids are reported as one error, in input order.
async fn validate_categories(
    gateway: &dyn CategoryGateway,
    ids: &[CategoryId],
) -> AppResult<Notification> {
    let mut notification = Notification::create();
    if ids.is_empty() {
        return Ok(notification);
    }

    let found = gateway.exists_by_ids(ids).await?;
    let missing: Vec<&str> = ids
        .iter()
        .filter(|id| !found.contains(*id))
        .map(CategoryId::value)
        .collect();

    if !missing.is_empty() {
        notification.append(ValidationError::new(format!(
            "Some categories could not be found: {}",
            missing.join(", ")
        )))?;
    }
    Ok(notification)
}
