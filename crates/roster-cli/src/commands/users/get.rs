//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::EntityId;
use roster_users::usecases::{GetUser, GetUserInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User id
    pub id: String,
}

pub async fn run(args: GetArgs, services: &Services) -> Result<()> {
    let user = GetUser::new(services.store.clone())
        .execute(GetUserInput {
            id: EntityId::new(args.id),
        })
        .await
        .context("Failed to get user")?;

    output::user(user, services.json)
}
