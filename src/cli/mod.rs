//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_year, Cli, Commands};
pub use output::{
    format_check_report, format_clean_report, format_fix_report, format_weekly_report,
};
