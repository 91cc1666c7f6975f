//! Pagination query parameters and the paginated response envelope.

use serde::Serialize;

use crate::domain::page::DEFAULT_PER_PAGE;

/// Query arguments that belong to pagination and never travel in links as
/// "other" arguments. Keys starting with `_` are dropped as well.
const RESERVED_ARGS: &[&str] = &["page", "per_page", "endpoint"];

/// Pagination query parameters as sent by the client.
///
/// Values that are not integers fall back to the default, the same way a
/// missing value does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub per_page: i64,
}

impl PaginationParams {
    /// Reads `page` (default 1) and `per_page` (default 10) from decoded query
    /// pairs. The first occurrence of a key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: int_arg(pairs, "page", 1),
            per_page: int_arg(pairs, "per_page", DEFAULT_PER_PAGE),
        }
    }
}

fn int_arg(pairs: &[(String, String)], key: &str, default: i64) -> i64 {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Query pairs carried over into navigation links.
pub fn passthrough_args(pairs: &[(String, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter(|(k, _)| !RESERVED_ARGS.contains(&k.as_str()) && !k.starts_with('_'))
        .cloned()
        .collect()
}

/// Pagination metadata with navigation links.
///
/// `previous` and `next` are `null` when there is no such page.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub next: Option<String>,
    pub page: i64,
    pub pages: i64,
    pub previous: Option<String>,
    pub per_page: i64,
    pub total: i64,
    pub first: String,
    pub last: String,
}

/// Paginated list envelope.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}
