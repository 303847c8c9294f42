//! Application use cases over a [`UserStore`](crate::store::UserStore).
//!
//! Each use case owns shared handles to its collaborators and exposes a
//! single [`UseCase::execute`] call.

mod delete_user;
mod get_user;
mod list_users;
mod signin;
mod signup;
mod update_password;
mod update_user;

use async_trait::async_trait;

use crate::Result;

pub use delete_user::{DeleteUser, DeleteUserInput};
pub use get_user::{GetUser, GetUserInput};
pub use list_users::ListUsers;
pub use signin::{Signin, SigninInput};
pub use signup::{Signup, SignupInput};
pub use update_password::{UpdatePassword, UpdatePasswordInput};
pub use update_user::{UpdateUser, UpdateUserInput};

/// A single application operation.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use roster_core::Store;
    use roster_memory::MemoryStore;

    use crate::hashing::{BcryptHasher, HashProvider};
    use crate::user::{User, UserProps};

    pub(crate) fn store() -> Arc<MemoryStore<UserProps>> {
        Arc::new(MemoryStore::new())
    }

    pub(crate) fn hasher() -> Arc<BcryptHasher> {
        Arc::new(BcryptHasher::with_cost(4))
    }

    /// Insert a user whose stored password is the hash of `password`.
    pub(crate) async fn seed(
        store: &MemoryStore<UserProps>,
        name: &str,
        email: &str,
        password: &str,
    ) -> User {
        let hash = hasher().generate_hash(password).await.unwrap();
        let user = UserProps::new(name, email, hash).into_user().unwrap();
        store.insert(user.clone()).await.unwrap();
        user
    }
}
