//! Weekly output cleanup use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemVault};
use std::path::PathBuf;

/// Outcome of a cleanup run
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Service for deleting generated weeks directories
pub struct CleanWeeksService {
    repository: FileSystemVault,
    config: Config,
}

impl CleanWeeksService {
    pub fn new(repository: FileSystemVault, config: Config) -> Self {
        CleanWeeksService { repository, config }
    }

    /// Remove the weeks directory of `year`, or every weeks directory in the vault.
    /// Weekly files are fully regenerated by `week`, so nothing is lost.
    pub fn execute(&self, year: Option<i32>) -> Result<CleanReport> {
        let mut report = CleanReport::default();

        for dir in self.repository.find_weeks_dirs(year, &self.config) {
            match self.repository.remove_dir(&dir) {
                Ok(()) => {
                    tracing::info!(path = %dir.display(), "removed weeks directory");
                    report.removed.push(dir);
                }
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "failed to remove weeks directory");
                    report.failed.push((dir, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}
