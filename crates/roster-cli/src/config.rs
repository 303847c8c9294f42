//! Resolved runtime configuration.
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | `--data-dir` | `ROSTER_DATA_DIR` | platform data directory |
//! | `--default-per-page` | `ROSTER_PER_PAGE` | 15 |
//! | `--unsorted-order` | `ROSTER_UNSORTED` | newest-first |
//! | `--bcrypt-cost` | `ROSTER_BCRYPT_COST` | bcrypt default |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;

use roster_core::{SearchDefaults, SortDirection};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub search: SearchDefaults,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        if cli.default_per_page == 0 {
            bail!("--default-per-page must be at least 1");
        }
        if !(4..=31).contains(&cli.bcrypt_cost) {
            bail!("--bcrypt-cost must be between 4 and 31");
        }

        Ok(Self {
            data_dir,
            search: SearchDefaults {
                per_page: cli.default_per_page,
                sort_dir: SortDirection::Desc,
                unsorted: cli.unsorted_order,
            },
            bcrypt_cost: cli.bcrypt_cost,
        })
    }

    /// Root of the user store.
    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.join("users")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "roster").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
