use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::EntityId;

use crate::output::UserOutput;
use crate::store::UserStore;
use crate::{Error, Result};

use super::UseCase;

#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub id: EntityId,
    pub name: String,
}

/// Rename a user.
pub struct UpdateUser<S> {
    store: Arc<S>,
}

impl<S> UpdateUser<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore> UseCase for UpdateUser<S> {
    type Input = UpdateUserInput;
    type Output = UserOutput;

    #[instrument(skip_all, fields(id = %input.id))]
    async fn execute(&self, input: UpdateUserInput) -> Result<UserOutput> {
        if input.name.is_empty() {
            return Err(Error::bad_request("Name not provided"));
        }

        let mut user = self.store.find_by_id(&input.id).await?;
        user.props_mut().rename(input.name)?;
        self.store.update(user.clone()).await?;

        debug!("Renamed user");
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{seed, store};
    use roster_core::Store;

    #[tokio::test]
    async fn renames_and_persists() {
        let store = store();
        let user = seed(&store, "Ana", "a@a.com", "1234").await;

        let output = UpdateUser::new(store.clone())
            .execute(UpdateUserInput {
                id: user.id().clone(),
                name: "new name".into(),
            })
            .await
            .unwrap();

        assert_eq!(output.name, "new name");
        assert_eq!(output.email, "a@a.com");
        let stored = store.find_by_id(user.id()).await.unwrap();
        assert_eq!(stored.props().name, "new name");
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_lookup() {
        let err = UpdateUser::new(store())
            .execute(UpdateUserInput {
                id: EntityId::new("fakeId"),
                name: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert_eq!(err.to_string(), "Name not provided");
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let err = UpdateUser::new(store())
            .execute(UpdateUserInput {
                id: EntityId::new("fakeId"),
                name: "x".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn overlong_name_leaves_the_user_untouched() {
        let store = store();
        let user = seed(&store, "Ana", "a@a.com", "1234").await;

        let err = UpdateUser::new(store.clone())
            .execute(UpdateUserInput {
                id: user.id().clone(),
                name: "n".repeat(256),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.find_by_id(user.id()).await.unwrap().props().name, "Ana");
    }
}
