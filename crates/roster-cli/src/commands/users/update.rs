//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::EntityId;
use roster_users::usecases::{UpdateUser, UpdateUserInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User id
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: String,
}

pub async fn run(args: UpdateArgs, services: &Services) -> Result<()> {
    let user = UpdateUser::new(services.store.clone())
        .execute(UpdateUserInput {
            id: EntityId::new(args.id),
            name: args.name,
        })
        .await
        .context("Failed to update user")?;

    output::user(user, services.json)?;
    if !services.json {
        output::success("User updated");
    }
    Ok(())
}
