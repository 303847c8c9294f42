//! Email lookups for any searchable user store.

use async_trait::async_trait;
use tracing::instrument;

use roster_core::error::NotFoundError;
use roster_core::{Props, SearchableStore};

use crate::user::{User, UserProps};
use crate::{Error, Result};

/// User-specific queries, available on every store of [`UserProps`].
#[async_trait]
pub trait UserStore: SearchableStore<Props = UserProps> {
    /// The user with exactly this email.
    async fn find_by_email(&self, email: &str) -> Result<User>;

    /// Fails with [`Error::Conflict`] if the email is taken.
    async fn email_exists(&self, email: &str) -> Result<()>;
}

#[async_trait]
impl<S> UserStore for S
where
    S: SearchableStore<Props = UserProps>,
{
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<User> {
        self.find_all()
            .await?
            .into_iter()
            .find(|user| user.props().email == email)
            .ok_or_else(|| NotFoundError::new(UserProps::KIND, email).into())
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> Result<()> {
        let taken = self
            .find_all()
            .await?
            .iter()
            .any(|user| user.props().email == email);

        if taken {
            return Err(Error::conflict("Email address already used"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Store;
    use roster_memory::MemoryStore;

    async fn store_with(email: &str) -> MemoryStore<UserProps> {
        let store = MemoryStore::new();
        let user = UserProps::new("Ana", email, "hash").into_user().unwrap();
        store.insert(user).await.unwrap();
        store
    }

    #[tokio::test]
    async fn finds_by_exact_email() {
        let store = store_with("a@a.com").await;
        let user = store.find_by_email("a@a.com").await.unwrap();
        assert_eq!(user.props().name, "Ana");
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let store = store_with("a@a.com").await;
        let err = store.find_by_email("b@a.com").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn taken_email_conflicts() {
        let store = store_with("a@a.com").await;
        let err = store.email_exists("a@a.com").await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(err.to_string(), "Email address already used");

        store.email_exists("free@a.com").await.unwrap();
    }
}
