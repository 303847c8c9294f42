//! Identity-bearing records.

mod id;
mod record;

pub use id::EntityId;
pub use record::Entity;
