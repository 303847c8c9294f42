use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::hashing::HashProvider;
use crate::output::UserOutput;
use crate::store::UserStore;
use crate::{Error, Result};

use super::UseCase;

#[derive(Debug, Clone, Default)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

/// Check an email and password pair.
pub struct Signin<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> Signin<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }
}

#[async_trait]
impl<S: UserStore, H: HashProvider> UseCase for Signin<S, H> {
    type Input = SigninInput;
    type Output = UserOutput;

    #[instrument(skip_all, fields(email = %input.email))]
    async fn execute(&self, input: SigninInput) -> Result<UserOutput> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(Error::bad_request("Missing required fields"));
        }

        let user = self.store.find_by_email(&input.email).await?;
        let matches = self
            .hasher
            .compare_hash(&input.password, &user.props().password)
            .await?;
        if !matches {
            return Err(Error::invalid_credentials("Invalid credentials"));
        }

        Ok(user.into())
    }
}
