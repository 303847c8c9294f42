//! Delete command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use roster_core::EntityId;
use roster_users::usecases::{DeleteUser, DeleteUserInput, GetUser, GetUserInput, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, services: &Services) -> Result<()> {
    let id = EntityId::new(args.id);

    let user = GetUser::new(services.store.clone())
        .execute(GetUserInput { id: id.clone() })
        .await
        .context("Failed to delete user")?;

    if !args.force {
        eprint!("This will delete user {} <{}>. Continue? [y/N] ", user.name, user.email);
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    DeleteUser::new(services.store.clone())
        .execute(DeleteUserInput { id: id.clone() })
        .await
        .context("Failed to delete user")?;

    output::success(&format!("User {} deleted", id));
    Ok(())
}
