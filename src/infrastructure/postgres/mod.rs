//! PostgreSQL gateways
//!
//! `sqlx` implementations of the persistence ports. Each gateway call is a
//! single statement or a single transaction.

mod cast_member;
mod category;
mod genre;

pub use cast_member::PgCastMemberGateway;
pub use category::PgCategoryGateway;
pub use genre::PgGenreGateway;

use crate::domain::GatewayError;

impl From<sqlx::Error> for GatewayError {
    fn from(error: sqlx::Error) -> Self {
        GatewayError::storage(error)
    }
}

/// Resolve a sort field to a whitelisted column. Unknown fields sort by the first entry.
fn sort_column(sort: &str, allowed: &[(&str, &'static str)]) -> &'static str {
    allowed
        .iter()
        .find(|(field, _)| *field == sort)
        .or_else(|| allowed.first())
        .map(|(_, column)| *column)
        .unwrap_or("name")
}

/// `%terms%` with LIKE wildcards in the terms escaped.
fn like_pattern(terms: &str) -> String {
    let escaped = terms
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn page_bounds(query: &crate::domain::SearchQuery) -> (i64, i64) {
    let limit = i64::from(query.per_page);
    let offset = i64::try_from(query.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}
