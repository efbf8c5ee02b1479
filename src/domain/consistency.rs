//! Vault naming consistency rules

use super::naming::{date_from_filename, is_asset_name, is_weekly_note_name};
use std::collections::HashSet;

/// A file found while walking the vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    /// Path relative to the vault root, `/`-separated
    pub relative: String,
    /// True when the file lives under an assets directory
    pub in_assets: bool,
}

impl VaultFile {
    pub fn new(relative: impl Into<String>, in_assets: bool) -> Self {
        VaultFile {
            relative: relative.into(),
            in_assets,
        }
    }

    fn filename(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(&self.relative)
    }
}

/// Problems found in a vault, as sorted vault-relative paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub invalid_notes: Vec<String>,
    pub duplicate_notes: Vec<String>,
    pub invalid_assets: Vec<String>,
}

impl ConsistencyReport {
    pub fn problem_count(&self) -> usize {
        self.invalid_notes.len() + self.duplicate_notes.len() + self.invalid_assets.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

pub struct ConsistencyChecker<'a> {
    weekly_prefix: &'a str,
    ignored_files: &'a [String],
}

impl<'a> ConsistencyChecker<'a> {
    pub fn new(weekly_prefix: &'a str, ignored_files: &'a [String]) -> Self {
        ConsistencyChecker {
            weekly_prefix,
            ignored_files,
        }
    }

    /// Classify every file; duplicates are detected in sorted path order
    pub fn check(&self, files: impl IntoIterator<Item = VaultFile>) -> ConsistencyReport {
        let mut files: Vec<VaultFile> = files.into_iter().collect();
        files.sort_by(|a, b| a.relative.cmp(&b.relative));

        let mut report = ConsistencyReport::default();
        let mut seen_notes: HashSet<String> = HashSet::new();

        for file in files {
            let name = file.filename();

            if file.in_assets {
                if !is_asset_name(name) {
                    report.invalid_assets.push(file.relative.clone());
                }
                continue;
            }

            if is_weekly_note_name(name, self.weekly_prefix)
                || self.ignored_files.iter().any(|f| f == name)
            {
                continue;
            }

            if date_from_filename(name).is_none() {
                report.invalid_notes.push(file.relative.clone());
                continue;
            }

            if !seen_notes.insert(name.to_string()) {
                report.duplicate_notes.push(file.relative.clone());
            }
        }

        report
    }
}
