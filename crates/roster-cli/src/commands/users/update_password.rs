//! Update password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::EntityId;
use roster_users::usecases::{UpdatePassword, UpdatePasswordInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdatePasswordArgs {
    /// User id
    pub id: String,

    /// Current password
    #[arg(long)]
    pub old_password: String,

    /// New password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: UpdatePasswordArgs, services: &Services) -> Result<()> {
    UpdatePassword::new(services.store.clone(), services.hasher.clone())
        .execute(UpdatePasswordInput {
            id: EntityId::new(args.id),
            password: args.password,
            old_password: args.old_password,
        })
        .await
        .context("Failed to update password")?;

    output::success("Password updated");
    Ok(())
}
