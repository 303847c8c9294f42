//! Subcommand implementations.

pub mod users;
