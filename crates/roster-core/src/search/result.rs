//! Search result type.

use serde::Serialize;
use serde_json::Value;

use super::SortDirection;
use crate::Result;
use crate::error::InvalidInputError;

/// Constructor input for [`SearchResult`].
#[derive(Clone, Debug)]
pub struct SearchResultProps<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: u32,
    pub per_page: u32,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    pub filter: Option<String>,
}

/// One page of search results plus pagination metadata.
///
/// Values are stored as given; only `last_page` is derived, as
/// `max(1, ceil(total / per_page))`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    items: Vec<T>,
    total: usize,
    current_page: u32,
    per_page: u32,
    last_page: u32,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl<T> SearchResult<T> {
    pub fn new(props: SearchResultProps<T>) -> Self {
        let last_page = last_page(props.total, props.per_page);
        Self {
            items: props.items,
            total: props.total,
            current_page: props.current_page,
            per_page: props.per_page,
            last_page,
            sort: props.sort,
            sort_dir: props.sort_dir,
            filter: props.filter,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of matching records before pagination.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Project every item, keeping the metadata.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }
}

impl<T: Serialize> SearchResult<T> {
    /// Flatten all fields, `lastPage` included, for transport.
    pub fn to_snapshot(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| {
            InvalidInputError::Snapshot {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn last_page(total: usize, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as usize;
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn result(total: usize, per_page: u32) -> SearchResult<&'static str> {
        SearchResult::new(SearchResultProps {
            items: vec!["test1", "test2", "test3", "test4"],
            total,
            current_page: 1,
            per_page,
            sort: Some("name".to_string()),
            sort_dir: Some(SortDirection::Asc),
            filter: Some("test".to_string()),
        })
    }

    #[test]
    fn snapshot_without_sort_or_filter() {
        let sut = SearchResult::new(SearchResultProps {
            items: vec!["test1", "test2", "test3", "test4"],
            total: 4,
            current_page: 1,
            per_page: 2,
            sort: None,
            sort_dir: None,
            filter: None,
        });
        assert_eq!(
            sut.to_snapshot().unwrap(),
            json!({
                "items": ["test1", "test2", "test3", "test4"],
                "total": 4,
                "currentPage": 1,
                "perPage": 2,
                "lastPage": 2,
                "sort": null,
                "sortDir": null,
                "filter": null,
            })
        );
    }

    #[test]
    fn snapshot_echoes_sort_and_filter() {
        assert_eq!(
            result(4, 2).to_snapshot().unwrap(),
            json!({
                "items": ["test1", "test2", "test3", "test4"],
                "total": 4,
                "currentPage": 1,
                "perPage": 2,
                "lastPage": 2,
                "sort": "name",
                "sortDir": "asc",
                "filter": "test",
            })
        );
    }

    #[test]
    fn last_page_examples() {
        assert_eq!(result(4, 10).last_page(), 1);
        assert_eq!(result(54, 10).last_page(), 6);
        assert_eq!(result(0, 10).last_page(), 1);
        assert_eq!(result(50, 10).last_page(), 5);
    }

    #[test]
    fn map_items_keeps_metadata() {
        let mapped = result(54, 10).map_items(str::len);
        assert_eq!(mapped.items(), &[5, 5, 5, 5]);
        assert_eq!(mapped.last_page(), 6);
        assert_eq!(mapped.filter(), Some("test"));
    }

    proptest! {
        #[test]
        fn last_page_formula(total in 0usize..100_000, per_page in 1u32..1_000) {
            let expected = ((total as f64) / f64::from(per_page)).ceil().max(1.0) as u32;
            prop_assert_eq!(last_page(total, per_page), expected);
        }
    }
}
