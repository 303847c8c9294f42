//! Presentation-facing page shape.

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

/// A page of projected items with the pagination fields a client needs.
///
/// Sort and filter echoes are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
}

impl<T> PaginationOutput<T> {
    /// Pair already-projected `items` with the pagination fields of `result`.
    pub fn to_output<R>(items: Vec<T>, result: &SearchResult<R>) -> Self {
        Self {
            items,
            total: result.total(),
            current_page: result.current_page(),
            last_page: result.last_page(),
            per_page: result.per_page(),
        }
    }
}

impl<T> From<SearchResult<T>> for PaginationOutput<T> {
    fn from(result: SearchResult<T>) -> Self {
        let total = result.total();
        let current_page = result.current_page();
        let last_page = result.last_page();
        let per_page = result.per_page();
        Self {
            items: result.into_items(),
            total,
            current_page,
            last_page,
            per_page,
        }
    }
}
