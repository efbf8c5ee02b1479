//! Configuration management

use crate::domain::{LinkRewriter, SectionRules};
use crate::error::{Result, WeeklogError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory inside the vault holding weeklog settings
pub const CONFIG_DIR: &str = ".weeklog";
const CONFIG_FILE: &str = "config.toml";

/// Vault settings, loaded once and passed by reference to every component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reserved_headings: Vec<String>,
    pub unsorted_heading: String,
    pub weeks_dir: String,
    pub assets_dir: String,
    pub weekly_prefix: String,
    pub ignored_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let rules = SectionRules::default();
        Config {
            reserved_headings: rules.reserved,
            unsorted_heading: rules.unsorted,
            weeks_dir: "weeks".to_string(),
            assets_dir: "assets".to_string(),
            weekly_prefix: "weekly".to_string(),
            ignored_files: vec![
                "main-index.md".to_string(),
                "tags-index.md".to_string(),
                "calendar-index.md".to_string(),
                "satistics-info.md".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn config_path(vault: &Path) -> PathBuf {
        vault.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from .weeklog/config.toml, falling back to defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::config_path(path);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(WeeklogError::file_io(config_path, e)),
        };

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .weeklog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Reject directory names that are not a single path segment
    pub(crate) fn validate(&self) -> Result<()> {
        for (key, value) in [("weeks_dir", &self.weeks_dir), ("assets_dir", &self.assets_dir)] {
            if value.is_empty() || value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(WeeklogError::Config(format!(
                    "{} must be a single directory name, got '{}'",
                    key, value
                )));
            }
        }
        if !self.unsorted_heading.starts_with(crate::domain::sections::HEADING_MARKER) {
            return Err(WeeklogError::Config(format!(
                "unsorted_heading must start with '## ', got '{}'",
                self.unsorted_heading
            )));
        }
        Ok(())
    }

    pub fn section_rules(&self) -> SectionRules {
        SectionRules {
            reserved: self
                .reserved_headings
                .iter()
                .map(|h| h.trim().to_string())
                .collect(),
            unsorted: self.unsorted_heading.clone(),
        }
    }

    pub fn link_rewriter(&self) -> LinkRewriter {
        LinkRewriter::new(&self.assets_dir)
    }

    /// Directory names skipped when scanning for daily notes
    pub fn excluded_dirs(&self) -> [&str; 2] {
        [self.weeks_dir.as_str(), self.assets_dir.as_str()]
    }

    /// Look up a single key for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "reserved_headings" => Ok(self.reserved_headings.join(", ")),
            "unsorted_heading" => Ok(self.unsorted_heading.clone()),
            "weeks_dir" => Ok(self.weeks_dir.clone()),
            "assets_dir" => Ok(self.assets_dir.clone()),
            "weekly_prefix" => Ok(self.weekly_prefix.clone()),
            "ignored_files" => Ok(self.ignored_files.join(", ")),
            _ => Err(WeeklogError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "reserved_headings",
            "unsorted_heading",
            "weeks_dir",
            "assets_dir",
            "weekly_prefix",
            "ignored_files",
        ]
    }
}
