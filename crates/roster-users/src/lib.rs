//! roster-users - User accounts on top of roster stores.
//!
//! Works with any [`SearchableStore`](roster_core::SearchableStore) of
//! [`UserProps`]: the in-memory store for tests, the file store for
//! persistence.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use roster_memory::MemoryStore;
//! use roster_users::usecases::{Signup, SignupInput, UseCase};
//! use roster_users::{BcryptHasher, UserProps};
//!
//! # async fn run() -> roster_users::Result<()> {
//! let store = Arc::new(MemoryStore::<UserProps>::new());
//! let signup = Signup::new(store, Arc::new(BcryptHasher::new()));
//!
//! let user = signup
//!     .execute(SignupInput {
//!         name: "Ana".into(),
//!         email: "ana@example.com".into(),
//!         password: "correct horse".into(),
//!     })
//!     .await?;
//! println!("created {}", user.id);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hashing;
pub mod output;
pub mod store;
pub mod usecases;
pub mod user;
pub mod validation;

pub use error::Error;
pub use hashing::{BcryptHasher, HashProvider};
pub use output::UserOutput;
pub use store::UserStore;
pub use user::{User, UserProps};
pub use validation::ValidationErrors;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
