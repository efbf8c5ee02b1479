//! Whitespace normalization use case

use crate::domain::naming::date_from_filename;
use crate::domain::spacing::normalize;
use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSystemVault};
use std::path::{Path, PathBuf};

/// Rewrite a file in place with normalized blank lines.
///
/// Returns `true` when the content changed. Unchanged files are not rewritten.
pub fn normalize_file(repository: &FileSystemVault, path: &Path) -> Result<bool> {
    let content = repository.read_note(path)?;
    let fixed = normalize(&content);
    if fixed == content {
        return Ok(false);
    }
    repository.write_note(path, &fixed)?;
    Ok(true)
}

/// Outcome of a normalization batch
#[derive(Debug, Clone, Default)]
pub struct FixSpacesReport {
    pub fixed: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Service for normalizing notes
pub struct FixSpacesService {
    repository: FileSystemVault,
    config: Config,
}

impl FixSpacesService {
    pub fn new(repository: FileSystemVault, config: Config) -> Self {
        FixSpacesService { repository, config }
    }

    /// Normalize the given files plus, when `year` is set, every daily note of that year.
    ///
    /// A file that cannot be read or written is recorded and the batch continues.
    pub fn execute(&self, files: &[PathBuf], year: Option<i32>) -> Result<FixSpacesReport> {
        let mut targets: Vec<PathBuf> = files.to_vec();

        if let Some(year) = year {
            match self.repository.scan_year(year, &self.config) {
                Ok(notes) => targets.extend(
                    notes
                        .into_iter()
                        .filter(|n| date_from_filename(n.filename()).is_some())
                        .map(|n| n.path),
                ),
                Err(WeeklogError::YearNotFound(dir)) => {
                    tracing::warn!(path = %dir.display(), "year directory not found");
                }
                Err(e) => return Err(e),
            }
        }

        let mut report = FixSpacesReport::default();
        for path in targets {
            match normalize_file(&self.repository, &path) {
                Ok(true) => report.fixed.push(path),
                Ok(false) => report.unchanged.push(path),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to normalize note");
                    report.failed.push((path, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}
