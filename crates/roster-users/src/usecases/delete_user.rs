use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::EntityId;

use crate::Result;
use crate::store::UserStore;

use super::UseCase;

#[derive(Debug, Clone)]
pub struct DeleteUserInput {
    pub id: EntityId,
}

/// Remove a user by id.
pub struct DeleteUser<S> {
    store: Arc<S>,
}

impl<S> DeleteUser<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore> UseCase for DeleteUser<S> {
    type Input = DeleteUserInput;
    type Output = ();

    #[instrument(skip_all, fields(id = %input.id))]
    async fn execute(&self, input: DeleteUserInput) -> Result<()> {
        self.store.delete(&input.id).await?;
        debug!("Deleted user");
        Ok(())
    }
}
