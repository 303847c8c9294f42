//! roster-core - Core record, search and store contracts.
//!
//! Every store in the workspace is built from the pieces defined here:
//!
//! - [`Entity`], an identity-bearing wrapper around a domain props type
//! - [`SearchParams`], sanitized pagination, sort and filter input
//! - [`SearchResult`], one page of records plus pagination metadata
//! - [`Store`] and [`SearchableStore`], the persistence contract
//! - [`PaginationOutput`], the presentation-facing page shape
//!
//! # Example
//!
//! ```
//! use roster_core::{SearchInput, SearchParams, SortDirection};
//!
//! let params = SearchParams::new(
//!     SearchInput::default()
//!         .with_page(0)
//!         .with_sort("name")
//!         .with_sort_dir("ASC"),
//! );
//!
//! assert_eq!(params.page(), 1);
//! assert_eq!(params.per_page(), 15);
//! assert_eq!(params.sort(), Some("name"));
//! assert_eq!(params.sort_dir(), Some(SortDirection::Asc));
//! ```

pub mod entity;
pub mod error;
pub mod pagination;
pub mod search;
pub mod traits;

pub use entity::{Entity, EntityId};
pub use error::Error;
pub use pagination::PaginationOutput;
pub use search::{
    SearchDefaults, SearchInput, SearchParams, SearchResult, SearchResultProps, SortDirection,
    UnsortedOrder,
};
pub use traits::{Props, Searchable, SearchableStore, SortValue, Store};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
