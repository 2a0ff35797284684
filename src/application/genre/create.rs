//! Create Genre

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::genre::GENRE;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::domain::{CategoryGateway, Genre, GenreGateway};
use crate::error::AppResult;

use super::{to_category_ids, validate_categories};

/// Command to create a genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn new(name: Option<String>, is_active: bool, categories: Vec<String>) -> Self {
        Self {
            name,
            is_active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreOutput {
    pub id: String,
}

pub struct CreateGenreUseCase {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
}

impl CreateGenreUseCase {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
    ) -> Self {
        Self {
            category_gateway,
            genre_gateway,
        }
    }

    /// Create a genre after checking its category references.
    ///
    /// Missing categories and name errors are reported together.
    pub async fn execute(&self, command: CreateGenreCommand) -> AppResult<CreateGenreOutput> {
        let categories = to_category_ids(command.categories);

        let mut notification = Notification::create();
        let references = validate_categories(self.category_gateway.as_ref(), &categories).await?;
        notification.append_all(&references)?;

        let genre =
            notification.validate(|| Genre::new_genre(command.name.as_deref(), command.is_active))?;

        let mut genre = match genre {
            Some(genre) if !notification.has_errors() => genre,
            _ => {
                return Err(notification
                    .into_failure(format!("Could not create Aggregate {}", GENRE))
                    .into())
            }
        };
        genre.add_categories(categories);

        let genre = self.genre_gateway.create(genre).await?;
        tracing::info!(
            genre_id = %genre.id(),
            categories = genre.categories().len(),
            "Genre created"
        );

        Ok(CreateGenreOutput {
            id: genre.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{Calls, FakeCategoryGateway, FakeGenreGateway};
    use crate::domain::{Category, CategoryId, GenreId};
    use crate::error::AppError;

    struct Fixture {
        categories: Arc<FakeCategoryGateway>,
        genres: Arc<FakeGenreGateway>,
        use_case: CreateGenreUseCase,
    }

    fn fixture() -> Fixture {
        let categories = Arc::new(FakeCategoryGateway::default());
        let genres = Arc::new(FakeGenreGateway::default());
        let use_case = CreateGenreUseCase::new(categories.clone(), genres.clone());
        Fixture {
            categories,
            genres,
            use_case,
        }
    }

    #[tokio::test]
    async fn test_create_genre_without_categories() {
        let f = fixture();

        let output = f
            .use_case
            .execute(CreateGenreCommand::new(Some("Ação".into()), true, vec![]))
            .await
            .unwrap();

        let stored = f
            .genres
            .find_by_id(&GenreId::from(output.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Ação");
        assert!(stored.is_active());
        assert!(stored.categories().is_empty());
        assert_eq!(Calls::count(&f.categories.calls.exists_by_ids), 0);
    }

    #[tokio::test]
    async fn test_create_genre_with_existing_categories() {
        let f = fixture();
        let filmes = f
            .categories
            .seed(Category::new_category(Some("Filmes"), None, true).unwrap())
            .await;
        let series = f
            .categories
            .seed(Category::new_category(Some("Séries"), None, true).unwrap())
            .await;

        let output = f
            .use_case
            .execute(CreateGenreCommand::new(
                Some("Ação".into()),
                false,
                vec![
                    series.id().to_string(),
                    filmes.id().to_string(),
                    series.id().to_string(),
                ],
            ))
            .await
            .unwrap();

        let stored = f
            .genres
            .find_by_id(&GenreId::from(output.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            stored.categories(),
            &[series.id().clone(), filmes.id().clone()]
        );
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[tokio::test]
    async fn test_create_genre_with_missing_category() {
        let f = fixture();
        let a = f
            .categories
            .seed(Category::new_category(Some("Filmes"), None, true).unwrap())
            .await;

        let err = f
            .use_case
            .execute(CreateGenreCommand::new(
                Some("Ação".into()),
                true,
                vec![a.id().to_string(), "B".into()],
            ))
            .await
            .unwrap_err();

        let domain = err.as_domain().unwrap();
        assert_eq!(domain.to_string(), "Could not create Aggregate Genre");
        assert_eq!(domain.errors().len(), 1);
        assert_eq!(
            domain.errors()[0].message,
            "Some categories could not be found: B"
        );
        assert_eq!(Calls::count(&f.genres.calls.create), 0);
    }

    #[tokio::test]
    async fn test_create_genre_reports_name_and_category_errors_together() {
        let f = fixture();

        let err = f
            .use_case
            .execute(CreateGenreCommand::new(
                Some(" ".into()),
                true,
                vec![CategoryId::from("B").into_inner()],
            ))
            .await
            .unwrap_err();

        let messages: Vec<&str> = err
            .as_domain()
            .unwrap()
            .errors()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Some categories could not be found: B",
                "'name' should not be empty",
            ]
        );
        assert_eq!(Calls::count(&f.genres.calls.create), 0);
    }

    #[tokio::test]
    async fn test_create_genre_category_gateway_failure() {
        let genres = Arc::new(FakeGenreGateway::default());
        let use_case =
            CreateGenreUseCase::new(Arc::new(FakeCategoryGateway::failing()), genres.clone());

        let err = use_case
            .execute(CreateGenreCommand::new(
                Some("Ação".into()),
                true,
                vec!["A".into()],
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Gateway(_)));
        assert_eq!(Calls::count(&genres.calls.create), 0);
    }
}
