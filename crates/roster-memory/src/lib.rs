//! roster-memory - In-memory reference store.

mod store;

pub use store::MemoryStore;
