//! Error types for weeklog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weeklog
#[derive(Debug, Error)]
pub enum WeeklogError {
    #[error("Vault not found: {0}")]
    VaultNotFound(PathBuf),

    #[error("Year directory not found: {0}")]
    YearNotFound(PathBuf),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("I/O error on {}: {}", path.display(), source)]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Vault is inconsistent: {0} problem(s) found")]
    Inconsistent(usize),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WeeklogError {
    /// Wrap an I/O error with the path it happened on
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeeklogError::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WeeklogError::VaultNotFound(_) => 2,
            WeeklogError::InvalidYear(_) => 3,
            WeeklogError::Inconsistent(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WeeklogError::VaultNotFound(path) => {
                format!(
                    "Vault not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the vault directory with --vault <PATH>\n\
                    • Set WEEKLOG_VAULT environment variable to your vault path\n\
                    • Run weeklog from inside the vault directory",
                    path.display()
                )
            }
            WeeklogError::InvalidYear(year) => {
                format!(
                    "Invalid year: '{}'\n\n\
                    The year must be a four digit number, e.g.:\n\
                    weeklog week 2024",
                    year
                )
            }
            WeeklogError::Inconsistent(count) => {
                format!(
                    "{} problem(s) found in the vault.\n\n\
                    Rename the files listed above so that notes follow YYYY-MM-DD.md\n\
                    and assets follow YYYY-MM-DD-name.ext",
                    count
                )
            }
            WeeklogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: reserved_headings, unsorted_heading, weeks_dir,\n\
                        assets_dir, weekly_prefix, ignored_files",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            WeeklogError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse .weeklog/config.toml: {}\n\n\
                    Fix the file or remove it to use the defaults",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WeeklogError
pub type Result<T> = std::result::Result<T, WeeklogError>;
