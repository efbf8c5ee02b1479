//! Config management use case

use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSystemVault, VaultRepository};

/// Service for managing vault configuration
pub struct ConfigService {
    repository: FileSystemVault,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemVault) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.repository.load_config()?.get(key)
    }

    /// Set a config value; list keys take a comma separated value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "reserved_headings" => config.reserved_headings = split_list(value),
            "ignored_files" => config.ignored_files = split_list(value),
            "unsorted_heading" => config.unsorted_heading = value.trim().to_string(),
            "weeks_dir" => config.weeks_dir = value.trim().to_string(),
            "assets_dir" => config.assets_dir = value.trim().to_string(),
            "weekly_prefix" => config.weekly_prefix = value.trim().to_string(),
            _ => {
                return Err(WeeklogError::Config(format!(
                    "Unknown config key: '{}'",
                    key
                )));
            }
        }

        config.validate()?;
        config.save_to_dir(self.repository.root())
    }

    /// All effective config values, in display order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        Config::keys()
            .iter()
            .map(|key| config.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(FileSystemVault::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(service(&temp).get("assets_dir").unwrap(), "assets");
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("reserved_headings", "## tags, ## private").unwrap();
        assert_eq!(
            service.get("reserved_headings").unwrap(),
            "## tags, ## private"
        );
        assert!(temp.path().join(".weeklog/config.toml").exists());
    }

    #[test]
    fn test_set_unknown_key() {
        let temp = TempDir::new().unwrap();
        let err = service(&temp).set("colour", "blue").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_set_rejects_nested_dir() {
        let temp = TempDir::new().unwrap();
        assert!(service(&temp).set("weeks_dir", "a/b").is_err());
        assert!(!temp.path().join(".weeklog/config.toml").exists());
    }

    #[test]
    fn test_list_has_every_key() {
        let temp = TempDir::new().unwrap();
        let values = service(&temp).list().unwrap();
        assert_eq!(values.len(), Config::keys().len());
        assert_eq!(values[0], ("reserved_headings", "## tags, ## next, ## refs".to_string()));
    }
}
