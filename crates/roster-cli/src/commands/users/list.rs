//! List command implementation.
//!
//! Every option is passed through as a raw string; the search layer decides
//! what is usable and falls back to defaults for the rest.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use roster_core::SearchInput;
use roster_users::usecases::{ListUsers, UseCase};

use super::Services;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Users per page
    #[arg(long, allow_hyphen_values = true)]
    pub per_page: Option<String>,

    /// Field to sort by: name or createdAt
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub sort_dir: Option<String>,

    /// Case-insensitive name filter
    #[arg(long)]
    pub filter: Option<String>,
}

impl From<ListArgs> for SearchInput {
    fn from(args: ListArgs) -> Self {
        SearchInput {
            page: args.page.map(Value::String),
            per_page: args.per_page.map(Value::String),
            sort: args.sort.map(Value::String),
            sort_dir: args.sort_dir.map(Value::String),
            filter: args.filter.map(Value::String),
        }
    }
}

pub async fn run(args: ListArgs, services: &Services) -> Result<()> {
    let page = ListUsers::with_defaults(services.store.clone(), services.search)
        .execute(args.into())
        .await
        .context("Failed to list users")?;

    output::user_page(page, services.json)
}
