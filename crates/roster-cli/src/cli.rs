//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use roster_core::UnsortedOrder;
use roster_core::search::DEFAULT_PER_PAGE;

use crate::commands::users::UsersCommand;

/// Operator tool for roster user stores.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Directory holding the stores (defaults to the platform data directory)
    #[arg(long, env = "ROSTER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Page size for searches that give none
    #[arg(long, env = "ROSTER_PER_PAGE", default_value_t = DEFAULT_PER_PAGE, global = true)]
    pub default_per_page: u32,

    /// Ordering for searches without a sort field: newest-first or insertion-order
    #[arg(long, env = "ROSTER_UNSORTED", default_value_t = UnsortedOrder::NewestFirst, global = true)]
    pub unsorted_order: UnsortedOrder,

    /// bcrypt work factor for new password hashes
    #[arg(long, env = "ROSTER_BCRYPT_COST", default_value_t = bcrypt_default_cost(), global = true)]
    pub bcrypt_cost: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// User account operations
    Users(UsersCommand),
}

fn bcrypt_default_cost() -> u32 {
    roster_users::BcryptHasher::new().cost()
}
