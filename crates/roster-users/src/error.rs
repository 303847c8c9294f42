//! Error types for user operations.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors raised by user use cases.
///
/// Messages are the exact strings callers see; no prefix is added.
#[derive(Debug, Error)]
pub enum Error {
    /// A store operation failed, including not-found lookups.
    #[error(transparent)]
    Store(#[from] roster_core::Error),

    /// Required input was missing.
    #[error("{0}")]
    BadRequest(String),

    /// The request clashes with existing data.
    #[error("{0}")]
    Conflict(String),

    /// Sign-in failed.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The caller may not perform the change.
    #[error("{0}")]
    Unauthorized(String),

    /// User props broke a field rule.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The password hasher failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl Error {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Error::Conflict(message.into())
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Error::InvalidCredentials(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Error::Unauthorized(message.into())
    }

    /// Returns true if a lookup found no matching user.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(e) if e.is_not_found())
    }
}

impl From<roster_core::error::NotFoundError> for Error {
    fn from(err: roster_core::error::NotFoundError) -> Self {
        Error::Store(err.into())
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(err: bcrypt::BcryptError) -> Self {
        Error::Hashing(err.to_string())
    }
}
