//! Search parameters, results and the shared search pipeline.
//!
//! Raw, possibly-invalid input arrives as a [`SearchInput`]. It is turned
//! into canonical [`SearchParams`] by a total function, and stores answer
//! with a [`SearchResult`].

mod params;
mod pipeline;
mod result;

pub use params::{
    DEFAULT_PER_PAGE, SearchDefaults, SearchInput, SearchParams, SortDirection, UnsortedOrder,
};
pub use pipeline::{filter, paginate, run, sort};
pub use result::{SearchResult, SearchResultProps};
