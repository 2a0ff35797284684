//! Category gateway backed by the `categories` table

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    Category, CategoryGateway, CategoryId, GatewayError, Pagination, SearchQuery,
};

use super::{like_pattern, page_bounds, sort_column};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("createdAt", "created_at"),
    ("created_at", "created_at"),
    ("description", "description"),
];

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::with(
            CategoryId::from(row.id),
            row.name,
            row.description,
            row.active,
            row.created_at,
            row.updated_at,
            row.deleted_at,
        )
    }
}

#[derive(Debug, Clone)]
pub struct PgCategoryGateway {
    pool: PgPool,
}

impl PgCategoryGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryGateway for PgCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, active, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(category.id().value())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;

        tracing::debug!("Category {} inserted", category.id());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, description = $3, active = $4, updated_at = $5, deleted_at = $6
            WHERE id = $1
            "#,
        )
        .bind(category.id().value())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await?;

        Ok(category)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, active, created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        let pattern = like_pattern(query.trimmed_terms());
        let (limit, offset) = page_bounds(query);
        let sql = format!(
            r#"
            SELECT id, name, description, active, created_at, updated_at, deleted_at
            FROM categories
            WHERE name ILIKE $1 OR description ILIKE $1
            ORDER BY {column} {direction}, id {direction}
            LIMIT $2 OFFSET $3
            "#,
            column = sort_column(&query.sort, SORT_COLUMNS),
            direction = query.direction.as_sql(),
        );

        let rows: Vec<CategoryRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM categories WHERE name ILIKE $1 OR description ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            rows.into_iter().map(Category::from).collect(),
        ))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();
        let found: Vec<String> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ANY($1)")
            .bind(&values)
            .fetch_all(&self.pool)
            .await?;

        let found: HashSet<String> = found.into_iter().collect();
        Ok(ids
            .iter()
            .filter(|id| found.contains(id.value()))
            .cloned()
            .collect())
    }
}
