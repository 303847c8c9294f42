//! Core traits for records and stores.

mod props;
mod store;

pub use props::{Props, Searchable, SortValue};
pub use store::{SearchableStore, Store};
