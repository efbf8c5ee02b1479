//! File system vault repository

use crate::domain::naming::{is_day_note_name, is_weekly_note_name, weekly_filename};
use crate::domain::VaultFile;
use crate::error::{Result, WeeklogError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Environment variable pointing at the vault root
pub const VAULT_ENV: &str = "WEEKLOG_VAULT";

/// A candidate daily note found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub path: PathBuf,
    /// Path relative to the year directory, `/`-separated
    pub relative: String,
}

impl NoteEntry {
    pub fn new(path: PathBuf, relative: String) -> Self {
        NoteEntry { path, relative }
    }

    pub fn filename(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(&self.relative)
    }
}

/// Abstract repository for vault operations
pub trait VaultRepository {
    /// Get the root directory of this vault
    fn root(&self) -> &Path;

    /// Load configuration from .weeklog/config.toml (defaults when absent)
    fn load_config(&self) -> Result<Config>;

    /// Check that the vault root exists
    fn exists(&self) -> bool;
}

/// File system implementation of VaultRepository
#[derive(Debug, Clone)]
pub struct FileSystemVault {
    pub root: PathBuf,
}

impl FileSystemVault {
    /// Create a new vault handle with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemVault { root }
    }

    /// Resolve the vault root.
    /// An explicit path wins, then WEEKLOG_VAULT, then the current directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let root = match explicit {
            Some(path) => path.to_path_buf(),
            None => match std::env::var(VAULT_ENV) {
                Ok(path) if !path.is_empty() => PathBuf::from(path),
                _ => std::env::current_dir()?,
            },
        };

        let vault = FileSystemVault::new(root);
        if !vault.exists() {
            return Err(WeeklogError::VaultNotFound(vault.root));
        }
        Ok(vault)
    }

    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.root.join(year.to_string())
    }

    pub fn weeks_dir(&self, year: i32, config: &Config) -> PathBuf {
        self.year_dir(year).join(&config.weeks_dir)
    }

    pub fn weekly_path(&self, year: i32, week_number: u32, config: &Config) -> PathBuf {
        self.weeks_dir(year, config)
            .join(weekly_filename(year, week_number))
    }

    /// Path relative to the vault root for display, `/`-separated
    pub fn display_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        Self::normalize_relative_path(rel).unwrap_or_else(|| rel.display().to_string())
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn log_walk_error(error: &walkdir::Error) {
        let path = error.path().map(|p| p.display().to_string()).unwrap_or_default();
        tracing::warn!(path = %path, error = %error, "skipping unreadable vault entry");
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    }

    /// Enumerate candidate daily notes under `<root>/<year>`.
    ///
    /// Directories whose name is exactly the weeks or assets directory are
    /// skipped, as are hidden directories. Files must match `YYYY-MM-DD.md`
    /// and must not look like weekly output. The date itself is not
    /// validated here.
    pub fn scan_year(&self, year: i32, config: &Config) -> Result<Vec<NoteEntry>> {
        let year_dir = self.year_dir(year);
        if !year_dir.is_dir() {
            return Err(WeeklogError::YearNotFound(year_dir));
        }

        let excluded = config.excluded_dirs();
        let walker = WalkDir::new(&year_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            if Self::is_hidden(entry) {
                return false;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !excluded.contains(&name))
        });

        let mut notes = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    Self::log_walk_error(&e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if is_weekly_note_name(name, &config.weekly_prefix) || !is_day_note_name(name) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&year_dir) else {
                continue;
            };
            let Some(relative) = Self::normalize_relative_path(rel) else {
                continue;
            };
            notes.push(NoteEntry::new(entry.path().to_path_buf(), relative));
        }

        notes.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(notes)
    }

    /// List every file of the vault for the consistency check.
    /// Hidden directories and weeks directories are skipped.
    pub fn vault_files(&self, config: &Config) -> Vec<VaultFile> {
        let weeks_dir = config.weeks_dir.as_str();
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            !Self::is_hidden(entry) && entry.file_name().to_str() != Some(weeks_dir)
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    Self::log_walk_error(&e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(relative) = Self::normalize_relative_path(rel) else {
                continue;
            };
            let in_assets = rel
                .parent()
                .is_some_and(|dir| dir.iter().any(|part| part == config.assets_dir.as_str()));
            files.push(VaultFile::new(relative, in_assets));
        }
        files
    }

    /// Read a note's content
    pub fn read_note(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| WeeklogError::file_io(path, e))
    }

    /// Write note content (creates parent directories, overwrites if it exists)
    pub fn write_note(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| WeeklogError::file_io(parent, e))?;
            }
        }

        fs::write(path, content).map_err(|e| WeeklogError::file_io(path, e))
    }

    /// Weeks directories holding generated output, for one year or the whole vault
    pub fn find_weeks_dirs(&self, year: Option<i32>, config: &Config) -> Vec<PathBuf> {
        if let Some(year) = year {
            let dir = self.weeks_dir(year, config);
            return if dir.is_dir() { vec![dir] } else { Vec::new() };
        }

        let weeks_dir = config.weeks_dir.as_str();
        let mut found = Vec::new();
        let mut walker = WalkDir::new(&self.root).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    Self::log_walk_error(&e);
                    continue;
                }
            };
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }
            if Self::is_hidden(&entry) {
                walker.skip_current_dir();
                continue;
            }
            if entry.file_name().to_str() == Some(weeks_dir) {
                found.push(entry.path().to_path_buf());
                walker.skip_current_dir();
            }
        }
        found
    }

    /// Delete a generated weeks directory and everything in it
    pub fn remove_dir(&self, dir: &Path) -> Result<()> {
        fs::remove_dir_all(dir).map_err(|e| WeeklogError::file_io(dir, e))
    }
}

impl VaultRepository for FileSystemVault {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn exists(&self) -> bool {
        self.root.is_dir()
    }
}
