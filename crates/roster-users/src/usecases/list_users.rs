use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use roster_core::{PaginationOutput, SearchDefaults, SearchInput, SearchParams};

use crate::Result;
use crate::output::UserOutput;
use crate::store::UserStore;

use super::UseCase;

/// Search users from raw, unvalidated input.
pub struct ListUsers<S> {
    store: Arc<S>,
    defaults: SearchDefaults,
}

impl<S> ListUsers<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_defaults(store, SearchDefaults::default())
    }

    /// Use deployment-specific page size and ordering defaults.
    pub fn with_defaults(store: Arc<S>, defaults: SearchDefaults) -> Self {
        Self { store, defaults }
    }
}

#[async_trait]
impl<S: UserStore> UseCase for ListUsers<S> {
    type Input = SearchInput;
    type Output = PaginationOutput<UserOutput>;

    #[instrument(skip_all)]
    async fn execute(&self, input: SearchInput) -> Result<PaginationOutput<UserOutput>> {
        let params = SearchParams::with_defaults(input, &self.defaults);
        let result = self.store.search(&params).await?;
        let items = result.items().iter().map(UserOutput::from).collect();
        Ok(PaginationOutput::to_output(items, &result))
    }
}
