//! Genre gateway backed by `genres` and `genres_categories`

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{
    CategoryId, GatewayError, Genre, GenreGateway, GenreId, Pagination, SearchQuery,
};

use super::{like_pattern, page_bounds, sort_column};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("createdAt", "created_at"),
    ("created_at", "created_at"),
];

#[derive(Debug, sqlx::FromRow)]
struct GenreRow {
    id: String,
    name: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl GenreRow {
    fn into_genre(self, categories: Vec<CategoryId>) -> Genre {
        Genre::with(
            GenreId::from(self.id),
            self.name,
            self.active,
            categories,
            self.created_at,
            self.updated_at,
            self.deleted_at,
        )
    }
}

#[derive(Debug, Clone)]
pub struct PgGenreGateway {
    pool: PgPool,
}

impl PgGenreGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace the category links of a genre, keeping list order.
    async fn write_categories(
        tx: &mut Transaction<'_, Postgres>,
        genre: &Genre,
    ) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM genres_categories WHERE genre_id = $1")
            .bind(genre.id().value())
            .execute(&mut **tx)
            .await?;

        for (position, category_id) in genre.categories().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO genres_categories (genre_id, category_id, position)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(genre.id().value())
            .bind(category_id.value())
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    async fn categories_of(&self, genre_ids: &[String]) -> Result<HashMap<String, Vec<CategoryId>>, GatewayError> {
        let links: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT genre_id, category_id
            FROM genres_categories
            WHERE genre_id = ANY($1)
            ORDER BY genre_id, position
            "#,
        )
        .bind(genre_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_genre: HashMap<String, Vec<CategoryId>> = HashMap::new();
        for (genre_id, category_id) in links {
            by_genre
                .entry(genre_id)
                .or_default()
                .push(CategoryId::from(category_id));
        }
        Ok(by_genre)
    }
}

#[async_trait]
impl GenreGateway for PgGenreGateway {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO genres (id, name, active, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(genre.id().value())
        .bind(genre.name())
        .bind(genre.is_active())
        .bind(genre.created_at())
        .bind(genre.updated_at())
        .bind(genre.deleted_at())
        .execute(&mut *tx)
        .await?;

        Self::write_categories(&mut tx, &genre).await?;
        tx.commit().await?;

        tracing::debug!(
            "Genre {} inserted with {} categories",
            genre.id(),
            genre.categories().len()
        );
        Ok(genre)
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE genres
            SET name = $2, active = $3, updated_at = $4, deleted_at = $5
            WHERE id = $1
            "#,
        )
        .bind(genre.id().value())
        .bind(genre.name())
        .bind(genre.is_active())
        .bind(genre.updated_at())
        .bind(genre.deleted_at())
        .execute(&mut *tx)
        .await?;

        Self::write_categories(&mut tx, &genre).await?;
        tx.commit().await?;

        Ok(genre)
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        let row: Option<GenreRow> = sqlx::query_as(
            r#"
            SELECT id, name, active, created_at, updated_at, deleted_at
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut categories = self.categories_of(&[row.id.clone()]).await?;
        let linked = categories.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_genre(linked)))
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        let pattern = like_pattern(query.trimmed_terms());
        let (limit, offset) = page_bounds(query);
        let sql = format!(
            r#"
            SELECT id, name, active, created_at, updated_at, deleted_at
            FROM genres
            WHERE name ILIKE $1
            ORDER BY {column} {direction}, id {direction}
            LIMIT $2 OFFSET $3
            "#,
            column = sort_column(&query.sort, SORT_COLUMNS),
            direction = query.direction.as_sql(),
        );

        let rows: Vec<GenreRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE name ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let mut categories = self.categories_of(&ids).await?;

        let items = rows
            .into_iter()
            .map(|row| {
                let linked = categories.remove(&row.id).unwrap_or_default();
                row.into_genre(linked)
            })
            .collect();

        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }
}
