//! User subcommand implementations.

mod delete;
mod get;
mod list;
mod signin;
mod signup;
mod update;
mod update_password;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use roster_core::SearchDefaults;
use roster_file::FileStore;
use roster_users::{BcryptHasher, UserProps};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct UsersCommand {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// Register a new user
    Signup(signup::SignupArgs),

    /// Check a user's email and password
    Signin(signin::SigninArgs),

    /// Show a single user
    Get(get::GetArgs),

    /// Search users with paging, sorting and filtering
    List(list::ListArgs),

    /// Rename a user
    Update(update::UpdateArgs),

    /// Change a user's password
    UpdatePassword(update_password::UpdatePasswordArgs),

    /// Delete a user
    Delete(delete::DeleteArgs),
}

/// Collaborators shared by every user subcommand.
pub struct Services {
    pub store: Arc<FileStore<UserProps>>,
    pub hasher: Arc<BcryptHasher>,
    pub search: SearchDefaults,
    pub json: bool,
}

impl Services {
    fn open(config: &Config, json: bool) -> Result<Self> {
        let root = config.users_dir();
        let store = FileStore::open(&root)
            .with_context(|| format!("Failed to open user store at {}", root.display()))?;

        Ok(Self {
            store: Arc::new(store),
            hasher: Arc::new(BcryptHasher::with_cost(config.bcrypt_cost)),
            search: config.search,
            json,
        })
    }
}

pub async fn handle(cmd: UsersCommand, config: &Config) -> Result<()> {
    let services = Services::open(config, cmd.json)?;

    match cmd.command {
        UsersSubcommand::Signup(args) => signup::run(args, &services).await,
        UsersSubcommand::Signin(args) => signin::run(args, &services).await,
        UsersSubcommand::Get(args) => get::run(args, &services).await,
        UsersSubcommand::List(args) => list::run(args, &services).await,
        UsersSubcommand::Update(args) => update::run(args, &services).await,
        UsersSubcommand::UpdatePassword(args) => update_password::run(args, &services).await,
        UsersSubcommand::Delete(args) => delete::run(args, &services).await,
    }
}
