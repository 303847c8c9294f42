use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::EntityId;

use crate::hashing::HashProvider;
use crate::output::UserOutput;
use crate::store::UserStore;
use crate::{Error, Result};

use super::UseCase;

#[derive(Debug, Clone)]
pub struct UpdatePasswordInput {
    pub id: EntityId,
    pub password: String,
    pub old_password: String,
}

/// Replace a user's password after checking the current one.
pub struct UpdatePassword<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> UpdatePassword<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }
}

#[async_trait]
impl<S: UserStore, H: HashProvider> UseCase for UpdatePassword<S, H> {
    type Input = UpdatePasswordInput;
    type Output = UserOutput;

    #[instrument(skip_all, fields(id = %input.id))]
    async fn execute(&self, input: UpdatePasswordInput) -> Result<UserOutput> {
        let mut user = self.store.find_by_id(&input.id).await?;

        if input.password.is_empty() || input.old_password.is_empty() {
            return Err(Error::unauthorized(
                "Old password and new password is required",
            ));
        }

        let matches = self
            .hasher
            .compare_hash(&input.old_password, &user.props().password)
            .await?;
        if !matches {
            return Err(Error::unauthorized("Old password does not match"));
        }

        let hash = self.hasher.generate_hash(&input.password).await?;
        user.props_mut().change_password(hash)?;
        self.store.update(user.clone()).await?;

        debug!("Changed user password");
        Ok(user.into())
    }
}
