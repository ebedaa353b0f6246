//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Paginated list envelope: the page plus enough to render pagination.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    /// Total rows matching the filter, across all pages.
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
