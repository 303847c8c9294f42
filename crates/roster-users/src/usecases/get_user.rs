use std::sync::Arc;

use async_trait::async_trait;

use roster_core::EntityId;

use crate::Result;
use crate::output::UserOutput;
use crate::store::UserStore;

use super::UseCase;

#[derive(Debug, Clone)]
pub struct GetUserInput {
    pub id: EntityId,
}

/// Fetch one user by id.
pub struct GetUser<S> {
    store: Arc<S>,
}

impl<S> GetUser<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore> UseCase for GetUser<S> {
    type Input = GetUserInput;
    type Output = UserOutput;

    async fn execute(&self, input: GetUserInput) -> Result<UserOutput> {
        let user = self.store.find_by_id(&input.id).await?;
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{seed, store};

    #[tokio::test]
    async fn returns_the_stored_user() {
        let store = store();
        let user = seed(&store, "Ana", "a@a.com", "1234").await;

        let output = GetUser::new(store)
            .execute(GetUserInput {
                id: user.id().clone(),
            })
            .await
            .unwrap();
        assert_eq!(output, UserOutput::from(&user));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let err = GetUser::new(store())
            .execute(GetUserInput {
                id: EntityId::new("fakeId"),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }
}
