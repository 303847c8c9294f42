//! Signin command implementation.

use anyhow::{Context, Result};
use clap::Args;

use roster_users::usecases::{Signin, SigninInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct SigninArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password to check
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: SigninArgs, services: &Services) -> Result<()> {
    let user = Signin::new(services.store.clone(), services.hasher.clone())
        .execute(SigninInput {
            email: args.email,
            password: args.password,
        })
        .await
        .context("Failed to sign in")?;

    output::user(user, services.json)?;
    if !services.json {
        output::success("Credentials are valid");
    }
    Ok(())
}
