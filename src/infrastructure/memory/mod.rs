//! In-memory gateways
//!
//! Process-local storage for running without PostgreSQL and for tests.
//! Search semantics mirror the PostgreSQL gateways: case-insensitive
//! substring match, whitelisted sort field, offset paging.

mod cast_member;
mod category;
mod genre;

pub use cast_member::InMemoryCastMemberGateway;
pub use category::InMemoryCategoryGateway;
pub use genre::InMemoryGenreGateway;

use std::cmp::Ordering;

use crate::domain::{Pagination, SearchQuery, SortDirection};

/// Filter, sort and slice a snapshot of stored items.
fn paginate<T, M, C>(items: Vec<T>, query: &SearchQuery, matches: M, compare: C) -> Pagination<T>
where
    M: Fn(&T, &str) -> bool,
    C: Fn(&T, &T, &str) -> Ordering,
{
    let terms = query.trimmed_terms().to_lowercase();
    let mut filtered: Vec<T> = items
        .into_iter()
        .filter(|item| terms.is_empty() || matches(item, terms.as_str()))
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort.as_str());
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total = filtered.len() as u64;
    let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
    let items = filtered
        .into_iter()
        .skip(offset)
        .take(query.per_page as usize)
        .collect();

    Pagination::new(query.page, query.per_page, total, items)
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
