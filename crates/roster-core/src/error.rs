//! Error types for roster stores.
//!
//! Lookups by id fail with [`NotFoundError`]. Backends that touch real
//! storage report [`StorageError`]. Search input never produces an error:
//! malformed values degrade to defaults inside [`SearchParams`](crate::SearchParams).

use thiserror::Error;

use crate::entity::EntityId;
use crate::traits::Props;

/// The unified error type for store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No record with the requested id exists.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing storage failed (I/O, corrupt data, lock contention).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A value could not be converted to or from its stored form.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// A record lookup by id found no match.
///
/// The message is fixed per entity kind; the id is carried alongside for
/// callers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} not found")]
pub struct NotFoundError {
    kind: &'static str,
    id: String,
}

impl NotFoundError {
    /// Create a not-found error for an entity kind and lookup key.
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Create a not-found error for the kind declared by `P`.
    pub fn of<P: Props>(id: &EntityId) -> Self {
        Self::new(P::KIND, id.as_str())
    }

    /// The entity kind that was searched.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The id (or other lookup key) that had no match.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A filesystem operation failed.
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    /// Stored data could not be decoded.
    #[error("corrupt data in {path}: {message}")]
    Corrupt { path: String, message: String },

    /// Another process holds the store.
    #[error("store at {path} is locked by another process")]
    Locked { path: String },
}

/// Input conversion errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Props could not be flattened into a snapshot object.
    #[error("cannot snapshot record: {reason}")]
    Snapshot { reason: String },

    /// Unknown keyword for an enumerated option.
    #[error("unknown {option} '{value}'")]
    UnknownOption { option: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_fixed_per_kind() {
        let a = NotFoundError::new("Entity", "one");
        let b = NotFoundError::new("Entity", "two");
        assert_eq!(a.to_string(), "Entity not found");
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(b.id(), "two");
    }

    #[test]
    fn not_found_is_transparent_through_error() {
        let err: Error = NotFoundError::new("User", "abc").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }
}
