//! Filter, sort and paginate over an in-order record sequence.
//!
//! Store implementations load their records in storage order and hand
//! them to [`run`].

use crate::entity::Entity;
use crate::traits::{Searchable, SortValue};

use super::{SearchParams, SearchResult, SearchResultProps, SortDirection, UnsortedOrder};

/// Run a search over records given in storage order.
///
/// 1. [`filter`] on the props' filter field.
/// 2. [`sort`] by the requested field, or apply the unsorted ordering.
/// 3. [`paginate`] into the requested page; `total` counts the filtered set.
pub fn run<P: Searchable>(
    entities: Vec<Entity<P>>,
    params: &SearchParams,
) -> SearchResult<Entity<P>> {
    let filtered = filter(entities, params.filter());
    let sorted = sort(filtered, params.sort(), params.sort_dir(), params.unsorted());
    let total = sorted.len();
    let items = paginate(sorted, params.page(), params.per_page());

    SearchResult::new(SearchResultProps {
        items,
        total,
        current_page: params.page(),
        per_page: params.per_page(),
        sort: params.sort().map(str::to_string),
        sort_dir: params.sort_dir(),
        filter: params.filter().map(str::to_string),
    })
}

/// Keep records whose filter field contains `needle`, ignoring case.
pub fn filter<P: Searchable>(entities: Vec<Entity<P>>, needle: Option<&str>) -> Vec<Entity<P>> {
    let Some(needle) = needle else {
        return entities;
    };

    let needle = needle.to_lowercase();
    entities
        .into_iter()
        .filter(|e| e.props().filter_field().to_lowercase().contains(&needle))
        .collect()
}

/// Order records.
///
/// A sortable field gives a stable sort in `dir`. An unknown field keeps the
/// given order. No field applies `unsorted`.
pub fn sort<P: Searchable>(
    mut entities: Vec<Entity<P>>,
    field: Option<&str>,
    dir: Option<SortDirection>,
    unsorted: UnsortedOrder,
) -> Vec<Entity<P>> {
    match field {
        None => {
            if unsorted == UnsortedOrder::NewestFirst {
                entities.reverse();
            }
        }
        Some(field) if P::SORTABLE_FIELDS.contains(&field) => {
            let dir = dir.unwrap_or_default();
            entities.sort_by(|a, b| {
                let a = a.props().sort_value(field);
                let b = b.props().sort_value(field);
                dir.apply(SortValue::compare(a.as_ref(), b.as_ref()))
            });
        }
        Some(_) => {}
    }
    entities
}

/// Slice out page `page` (1-based) of size `per_page`; empty past the end.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    let per_page = per_page as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}
