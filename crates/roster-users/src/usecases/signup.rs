use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::hashing::HashProvider;
use crate::output::UserOutput;
use crate::store::UserStore;
use crate::user::UserProps;
use crate::{Error, Result};

use super::UseCase;

#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a new user with a hashed password.
pub struct Signup<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> Signup<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }
}

#[async_trait]
impl<S: UserStore, H: HashProvider> UseCase for Signup<S, H> {
    type Input = SignupInput;
    type Output = UserOutput;

    #[instrument(skip_all, fields(email = %input.email))]
    async fn execute(&self, input: SignupInput) -> Result<UserOutput> {
        let SignupInput {
            name,
            email,
            password,
        } = input;
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(Error::bad_request("Missing required fields"));
        }

        UserProps::new(&name, &email, &password).validate()?;
        self.store.email_exists(&email).await?;

        let hash = self.hasher.generate_hash(&password).await?;
        let user = UserProps::new(name, email, hash).into_user()?;
        self.store.insert(user.clone()).await?;

        debug!(id = %user.id(), "Signed up user");
        Ok(user.into())
    }
}
