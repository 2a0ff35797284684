use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{GatewayError, Genre, GenreGateway, GenreId, Pagination, SearchQuery};

use super::{contains_ignore_case, paginate};

#[derive(Debug, Default)]
pub struct InMemoryGenreGateway {
    genres: RwLock<HashMap<GenreId, Genre>>,
}

impl InMemoryGenreGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenreGateway for InMemoryGenreGateway {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.genres
            .write()
            .await
            .insert(genre.id().clone(), genre.clone());
        Ok(genre)
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        if let Some(stored) = self.genres.write().await.get_mut(genre.id()) {
            *stored = genre.clone();
        }
        Ok(genre)
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        self.genres.write().await.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        Ok(self.genres.read().await.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        let snapshot: Vec<Genre> = self.genres.read().await.values().cloned().collect();

        Ok(paginate(
            snapshot,
            query,
            |genre, terms| contains_ignore_case(genre.name(), terms),
            |a, b, sort| {
                let ordering = match sort {
                    "createdAt" | "created_at" => a.created_at().cmp(&b.created_at()),
                    _ => a.name().cmp(b.name()),
                };
                ordering.then_with(|| a.id().cmp(b.id()))
            },
        ))
    }
}
