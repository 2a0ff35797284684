//! Shared router state

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{CastMemberGateway, CategoryGateway, GenreGateway};
use crate::infrastructure::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
    PgCastMemberGateway, PgCategoryGateway, PgGenreGateway,
};

/// Gateways handed to every request
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryGateway>,
    pub genres: Arc<dyn GenreGateway>,
    pub cast_members: Arc<dyn CastMemberGateway>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryGateway>,
        genres: Arc<dyn GenreGateway>,
        cast_members: Arc<dyn CastMemberGateway>,
    ) -> Self {
        Self {
            categories,
            genres,
            cast_members,
        }
    }

    /// State backed by process-local maps. Data is lost on exit.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCategoryGateway::new()),
            Arc::new(InMemoryGenreGateway::new()),
            Arc::new(InMemoryCastMemberGateway::new()),
        )
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCategoryGateway::new(pool.clone())),
            Arc::new(PgGenreGateway::new(pool.clone())),
            Arc::new(PgCastMemberGateway::new(pool)),
        )
    }
}
