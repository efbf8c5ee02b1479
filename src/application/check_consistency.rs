//! Vault consistency check use case

use crate::domain::{ConsistencyChecker, ConsistencyReport};
use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSystemVault, VaultRepository};

/// Service for checking vault file names
pub struct CheckConsistencyService {
    repository: FileSystemVault,
    config: Config,
}

impl CheckConsistencyService {
    pub fn new(repository: FileSystemVault, config: Config) -> Self {
        CheckConsistencyService { repository, config }
    }

    /// Walk the vault and report misnamed notes, duplicates and misnamed assets
    pub fn execute(&self) -> Result<ConsistencyReport> {
        if !self.repository.exists() {
            return Err(WeeklogError::VaultNotFound(self.repository.root.clone()));
        }

        let files = self.repository.vault_files(&self.config);
        tracing::debug!(files = files.len(), "checking vault consistency");

        let checker = ConsistencyChecker::new(&self.config.weekly_prefix, &self.config.ignored_files);
        Ok(checker.check(files))
    }
}
