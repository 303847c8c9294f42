//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_users::usecases::{Signup, SignupInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address, unique across users
    #[arg(long)]
    pub email: String,

    /// Plain-text password; only its hash is stored
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: SignupArgs, services: &Services) -> Result<()> {
    let user = Signup::new(services.store.clone(), services.hasher.clone())
        .execute(SignupInput {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await
        .context("Failed to sign up")?;

    output::user(user, services.json)?;
    if !services.json {
        output::success("User created");
    }
    Ok(())
}
