//! Store traits.

use async_trait::async_trait;

use crate::entity::{Entity, EntityId};
use crate::search::{SearchParams, SearchResult};
use crate::traits::{Props, Searchable};
use crate::Result;

/// An ordered collection of records of one kind, addressable by id.
///
/// Implementations preserve insertion order and perform no duplicate-id
/// check on insert. Every id-keyed operation fails with
/// [`Error::NotFound`](crate::Error::NotFound) when the id is absent.
///
/// Implementations shared between tasks must make `update` and `delete`
/// atomic: of two racing deletes of the same id, the second observes
/// `NotFound`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Props type of the stored records.
    type Props: Props;

    /// Append a record.
    async fn insert(&self, entity: Entity<Self::Props>) -> Result<()>;

    /// Fetch the first record with the given id.
    async fn find_by_id(&self, id: &EntityId) -> Result<Entity<Self::Props>>;

    /// All records in storage order.
    async fn find_all(&self) -> Result<Vec<Entity<Self::Props>>>;

    /// Replace the stored record that has the same id, keeping its position.
    async fn update(&self, entity: Entity<Self::Props>) -> Result<()>;

    /// Remove the record with the given id, keeping the order of the rest.
    async fn delete(&self, id: &EntityId) -> Result<()>;
}

/// A store that can filter, sort and paginate its records.
#[async_trait]
pub trait SearchableStore: Store<Props: Searchable> {
    /// Run a search: filter, then sort, then paginate.
    ///
    /// See [`search::run`](crate::search::run) for the exact algorithm.
    async fn search(&self, params: &SearchParams) -> Result<SearchResult<Entity<Self::Props>>>;
}
