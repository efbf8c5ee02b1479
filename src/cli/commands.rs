//! CLI command definitions

use crate::error::{Result, WeeklogError};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weeklog")]
#[command(about = "Weekly aggregation and tidying for a markdown journal vault", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Vault root (default: $WEEKLOG_VAULT, then the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub vault: Option<PathBuf>,

    /// Print diagnostics (skipped files, debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate weekly documents for a year
    Week {
        /// Year to aggregate (default: current year)
        year: Option<String>,
    },

    /// Normalize blank lines in notes
    FixSpaces {
        /// Files to normalize in place
        files: Vec<PathBuf>,

        /// Also normalize every daily note of this year
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Delete generated weeks directories
    CleanWeeks {
        /// Only clean this year (default: every year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Check note and asset names in the vault
    Check,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a year argument; `None` means the current local year
pub fn parse_year(year: Option<&str>) -> Result<i32> {
    let Some(raw) = year else {
        return Ok(Local::now().year());
    };

    let trimmed = raw.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(WeeklogError::InvalidYear(raw.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| WeeklogError::InvalidYear(raw.to_string()))
}
