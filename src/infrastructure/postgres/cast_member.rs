//! CastMember gateway backed by the `cast_members` table

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    CastMember, CastMemberGateway, CastMemberId, CastMemberType, GatewayError, Pagination,
    SearchQuery,
};

use super::{like_pattern, page_bounds, sort_column};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("createdAt", "created_at"),
    ("created_at", "created_at"),
    ("type", "type"),
];

#[derive(Debug, sqlx::FromRow)]
struct CastMemberRow {
    id: String,
    name: String,
    #[sqlx(rename = "type")]
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CastMemberRow> for CastMember {
    type Error = GatewayError;

    fn try_from(row: CastMemberRow) -> Result<Self, Self::Error> {
        let kind: CastMemberType = row
            .kind
            .parse()
            .map_err(|reason| GatewayError::CorruptedRecord {
                id: row.id.clone(),
                reason,
            })?;

        Ok(CastMember::with(
            CastMemberId::from(row.id),
            row.name,
            kind,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PgCastMemberGateway {
    pool: PgPool,
}

impl PgCastMemberGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CastMemberGateway for PgCastMemberGateway {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        sqlx::query(
            r#"
            INSERT INTO cast_members (id, name, type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member.id().value())
        .bind(member.name())
        .bind(member.kind().as_str())
        .bind(member.created_at())
        .bind(member.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        sqlx::query("UPDATE cast_members SET name = $2, type = $3, updated_at = $4 WHERE id = $1")
            .bind(member.id().value())
            .bind(member.name())
            .bind(member.kind().as_str())
            .bind(member.updated_at())
            .execute(&self.pool)
            .await?;

        Ok(member)
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        sqlx::query("DELETE FROM cast_members WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        let row: Option<CastMemberRow> = sqlx::query_as(
            "SELECT id, name, type, created_at, updated_at FROM cast_members WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CastMember::try_from).transpose()
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        let pattern = like_pattern(query.trimmed_terms());
        let (limit, offset) = page_bounds(query);
        let sql = format!(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM cast_members
            WHERE name ILIKE $1
            ORDER BY {column} {direction}, id {direction}
            LIMIT $2 OFFSET $3
            "#,
            column = sort_column(&query.sort, SORT_COLUMNS),
            direction = query.direction.as_sql(),
        );

        let rows: Vec<CastMemberRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cast_members WHERE name ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(CastMember::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }
}
