//! Weekly log generation use case
//!
//! Orchestrates scan -> group -> merge -> write -> normalize for one year,
//! one week at a time. A failing week is recorded and the run moves on.

use crate::application::fix_spaces::normalize_file;
use crate::domain::naming::date_from_filename;
use crate::domain::weekly::group_by_week;
use crate::domain::{
    DailyNote, LinkRewriter, NoteRef, SectionExtractor, SectionRules, WeekBucket, WeeklyMerger,
};
use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSystemVault, VaultRepository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A week whose generation failed
#[derive(Debug, Clone)]
pub struct WeekFailure {
    /// Weekly file that could not be produced
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a weekly log run
#[derive(Debug, Clone, Default)]
pub struct WeeklyReport {
    pub year: i32,
    /// Weekly files written, in week order
    pub written: Vec<PathBuf>,
    pub failed: Vec<WeekFailure>,
    /// Files matching the day grammar but naming an impossible date
    pub skipped: Vec<PathBuf>,
    /// The year directory does not exist
    pub year_missing: bool,
}

impl WeeklyReport {
    fn empty(year: i32) -> Self {
        WeeklyReport {
            year,
            ..WeeklyReport::default()
        }
    }

    /// True when no week qualified for aggregation
    pub fn is_nothing_to_do(&self) -> bool {
        self.written.is_empty() && self.failed.is_empty()
    }
}

/// Service for generating weekly documents
pub struct WeeklyLogService {
    repository: FileSystemVault,
    config: Config,
    rules: SectionRules,
    links: LinkRewriter,
}

impl WeeklyLogService {
    /// Create new weekly log service
    pub fn new(repository: FileSystemVault, config: Config) -> Self {
        let rules = config.section_rules();
        let links = config.link_rewriter();
        WeeklyLogService {
            repository,
            config,
            rules,
            links,
        }
    }

    /// Regenerate every weekly document of `year`.
    ///
    /// # Errors
    ///
    /// Only a missing vault root is an error. A missing year directory
    /// yields an empty report; per-week I/O failures are collected in it.
    pub fn execute(&self, year: i32) -> Result<WeeklyReport> {
        if !self.repository.exists() {
            return Err(WeeklogError::VaultNotFound(self.repository.root.clone()));
        }

        let mut report = WeeklyReport::empty(year);

        // 1. Scan the year directory
        let entries = match self.repository.scan_year(year, &self.config) {
            Ok(entries) => entries,
            Err(WeeklogError::YearNotFound(dir)) => {
                tracing::info!(path = %dir.display(), "year directory not found, nothing to do");
                report.year_missing = true;
                return Ok(report);
            }
            Err(e) => return Err(e),
        };

        // 2. Strict date validation
        let mut notes = Vec::with_capacity(entries.len());
        for entry in entries {
            match date_from_filename(entry.filename()) {
                Some(date) => notes.push(NoteRef::new(date, entry.path, entry.relative)),
                None => {
                    tracing::debug!(path = %entry.path.display(), "skipping note with invalid date");
                    report.skipped.push(entry.path);
                }
            }
        }

        // 3-9. One week at a time, in ascending order
        let mut claimed = HashSet::new();
        for bucket in group_by_week(notes, year) {
            let target = self
                .repository
                .weekly_path(year, bucket.week_number, &self.config);

            // Notes dated outside the year can map two spans onto one file
            if !claimed.insert(target.clone()) {
                tracing::warn!(
                    path = %target.display(),
                    week_start = %bucket.week_start,
                    "weekly file already written by an earlier week"
                );
                report.failed.push(WeekFailure {
                    path: target,
                    error: format!(
                        "week starting {} maps to a weekly file already written",
                        bucket.week_start
                    ),
                });
                continue;
            }

            match self.generate_week(&bucket, &target) {
                Ok(()) => {
                    tracing::info!(path = %target.display(), notes = bucket.members.len(), "weekly file updated");
                    report.written.push(target);
                }
                Err(e) => {
                    tracing::warn!(path = %target.display(), error = %e, "failed to generate weekly file");
                    report.failed.push(WeekFailure {
                        path: target,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    fn generate_week(&self, bucket: &WeekBucket, target: &Path) -> Result<()> {
        let extractor = SectionExtractor::new(&self.rules);
        let mut merger = WeeklyMerger::new(&self.rules, &self.links);

        for member in &bucket.members {
            let content = self.repository.read_note(&member.path)?;
            let note = DailyNote {
                date: member.date,
                path: member.path.clone(),
                sections: extractor.extract_str(&content),
            };
            merger.absorb(&note);
        }

        let document = merger.finish(bucket);
        self.repository.write_note(target, &document.render())?;
        normalize_file(&self.repository, target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn service(temp: &TempDir) -> WeeklyLogService {
        WeeklyLogService::new(
            FileSystemVault::new(temp.path().to_path_buf()),
            Config::default(),
        )
    }

    #[test]
    fn test_end_to_end_example() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "2024/2024-01-01.md",
            "# 01-01-2024\n\n## note\n\nhello\n\n## tags\n\n- x\n",
        );
        write(
            temp.path(),
            "2024/2024-01-02.md",
            "# 02-01-2024\n\n## note\n\nworld\n\n",
        );

        let report = service(&temp).execute(2024).unwrap();
        let weekly = temp.path().join("2024/weeks/2024weekly01.md");
        assert_eq!(report.written, vec![weekly.clone()]);

        let content = fs::read_to_string(weekly).unwrap();
        assert_eq!(
            content,
            "# Week 1 (2024-01-01 - 2024-01-07)\n\n\
             - [2024-01-01](../2024-01-01.md)\n\
             - [2024-01-02](../2024-01-02.md)\n\n\
             ## note\n\n\
             hello\n\n\
             world\n\n"
        );
        assert!(!content.contains("- x"));
    }

    #[test]
    fn test_missing_year_is_nothing_to_do() {
        let temp = TempDir::new().unwrap();
        let report = service(&temp).execute(2024).unwrap();
        assert!(report.year_missing);
        assert!(report.is_nothing_to_do());
    }

    #[test]
    fn test_missing_vault_is_error() {
        let temp = TempDir::new().unwrap();
        let service = WeeklyLogService::new(
            FileSystemVault::new(temp.path().join("gone")),
            Config::default(),
        );
        assert!(matches!(
            service.execute(2024),
            Err(WeeklogError::VaultNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/2024-02-30.md", "## note\nghost\n");
        write(temp.path(), "2024/2024-02-28.md", "## note\nreal\n");

        let report = service(&temp).execute(2024).unwrap();
        assert_eq!(report.skipped, vec![temp.path().join("2024/2024-02-30.md")]);
        assert_eq!(report.written.len(), 1);

        let content = fs::read_to_string(&report.written[0]).unwrap();
        assert!(content.contains("real"));
        assert!(!content.contains("ghost"));
    }

    #[test]
    fn test_only_invalid_dates_is_nothing_to_do() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/2024-13-01.md", "## note\nghost\n");

        let report = service(&temp).execute(2024).unwrap();
        assert!(report.is_nothing_to_do());
        assert!(!report.year_missing);
        assert!(!temp.path().join("2024/weeks").exists());
    }

    #[test]
    fn test_one_file_per_week() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/2024-01-07.md", "## note\nsunday\n");
        write(temp.path(), "2024/2024-01-08.md", "## note\nmonday\n");

        let report = service(&temp).execute(2024).unwrap();
        assert_eq!(
            report.written,
            vec![
                temp.path().join("2024/weeks/2024weekly01.md"),
                temp.path().join("2024/weeks/2024weekly02.md"),
            ]
        );
        let second = fs::read_to_string(&report.written[1]).unwrap();
        assert!(second.starts_with("# Week 2 (2024-01-08 - 2024-01-14)\n"));
        assert!(!second.contains("sunday"));
    }

    #[test]
    fn test_failed_week_does_not_abort_run() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/2024-01-01.md", "## note\nfirst\n");
        write(temp.path(), "2024/2024-01-08.md", "## note\nsecond\n");
        // A directory where the first weekly file should go blocks the write
        fs::create_dir_all(temp.path().join("2024/weeks/2024weekly01.md")).unwrap();

        let report = service(&temp).execute(2024).unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(
            report.failed[0].path,
            temp.path().join("2024/weeks/2024weekly01.md")
        );
        assert_eq!(
            report.written,
            vec![temp.path().join("2024/weeks/2024weekly02.md")]
        );
    }

    #[test]
    fn test_year_end_week_gets_its_own_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/2024-01-02.md", "## note\njanuary\n");
        write(temp.path(), "2024/2024-12-31.md", "## note\ndecember\n");

        let report = service(&temp).execute(2024).unwrap();
        assert!(report.failed.is_empty());
        assert_eq!(
            report.written,
            vec![
                temp.path().join("2024/weeks/2024weekly01.md"),
                temp.path().join("2024/weeks/2024weekly53.md"),
            ]
        );

        let january = fs::read_to_string(&report.written[0]).unwrap();
        assert!(january.starts_with("# Week 1 (2024-01-01 - 2024-01-07)\n"));
        assert!(january.contains("january"));
        assert!(!january.contains("december"));

        let december = fs::read_to_string(&report.written[1]).unwrap();
        assert!(december.starts_with("# Week 53 (2024-12-30 - 2025-01-05)\n"));
        assert!(december.contains("december"));
        assert!(!december.contains("january"));
    }

    #[test]
    fn test_colliding_weeks_are_reported_not_overwritten() {
        let temp = TempDir::new().unwrap();
        // Both stray notes come from earlier ISO years, so both map to week 0
        write(temp.path(), "2024/2022-06-01.md", "## note\nfirst stray\n");
        write(temp.path(), "2024/2023-06-01.md", "## note\nsecond stray\n");

        let report = service(&temp).execute(2024).unwrap();
        let target = temp.path().join("2024/weeks/2024weekly00.md");
        assert_eq!(report.written, vec![target.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, target);

        let content = fs::read_to_string(&target).unwrap();
        assert!(content.contains("first stray"));
        assert!(!content.contains("second stray"));
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "2024/2024-03-04.md",
            "# t\n## work\n- a\ntext [img](assets/2024-03-04-a.png)\n## next\n- later\n",
        );
        write(temp.path(), "2024/2024-03-06.md", "intro\n## ideas\nidea\n## work\n- b\n");

        let service = service(&temp);
        let first = service.execute(2024).unwrap();
        let before = fs::read(&first.written[0]).unwrap();
        let second = service.execute(2024).unwrap();
        let after = fs::read(&second.written[0]).unwrap();
        assert_eq!(before, after);

        let content = String::from_utf8(after).unwrap();
        assert!(content.contains("](../assets/2024-03-04-a.png)"));
        assert!(!content.contains("later"));
    }
}
