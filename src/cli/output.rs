//! Output formatting utilities

use crate::application::{CleanReport, FixSpacesReport, WeeklyReport};
use crate::domain::ConsistencyReport;
use crate::infrastructure::FileSystemVault;

/// Format the result of a weekly log run
pub fn format_weekly_report(
    report: &WeeklyReport,
    vault: &FileSystemVault,
    verbose: bool,
) -> String {
    let mut output = String::new();

    if verbose {
        for path in &report.skipped {
            output.push_str(&format!(
                "Skipped (invalid date): {}\n",
                vault.display_path(path)
            ));
        }
    }

    if report.is_nothing_to_do() {
        output.push_str(&format!("No notes found for year {}\n", report.year));
        return output;
    }

    for path in &report.written {
        output.push_str(&format!(
            "Updated weekly file: {}\n",
            vault.display_path(path)
        ));
    }
    for failure in &report.failed {
        output.push_str(&format!(
            "Failed weekly file: {} ({})\n",
            vault.display_path(&failure.path),
            failure.error
        ));
    }

    output
}

/// Format the result of a normalization batch
pub fn format_fix_report(report: &FixSpacesReport, vault: &FileSystemVault) -> String {
    if report.fixed.is_empty() && report.unchanged.is_empty() && report.failed.is_empty() {
        return "No notes to normalize\n".to_string();
    }

    let mut output = String::new();
    for path in &report.fixed {
        output.push_str(&format!("Normalized: {}\n", vault.display_path(path)));
    }
    for (path, error) in &report.failed {
        output.push_str(&format!("Failed: {} ({})\n", vault.display_path(path), error));
    }
    output.push_str(&format!(
        "{} normalized, {} already tidy, {} failed\n",
        report.fixed.len(),
        report.unchanged.len(),
        report.failed.len()
    ));
    output
}

/// Format the result of a weeks cleanup
pub fn format_clean_report(report: &CleanReport, vault: &FileSystemVault) -> String {
    if report.removed.is_empty() && report.failed.is_empty() {
        return "No weeks directories found\n".to_string();
    }

    let mut output = String::new();
    for path in &report.removed {
        output.push_str(&format!("Removed: {}\n", vault.display_path(path)));
    }
    for (path, error) in &report.failed {
        output.push_str(&format!("Failed: {} ({})\n", vault.display_path(path), error));
    }
    output
}

/// Format consistency problems, grouped by kind
pub fn format_check_report(report: &ConsistencyReport) -> String {
    if report.is_clean() {
        return "Vault is consistent\n".to_string();
    }

    let mut output = String::new();
    let groups = [
        ("Notes with invalid names:", &report.invalid_notes),
        ("Duplicate note names:", &report.duplicate_notes),
        ("Assets with invalid names:", &report.invalid_assets),
    ];
    for (title, paths) in groups {
        if paths.is_empty() {
            continue;
        }
        output.push_str(title);
        output.push('\n');
        for path in paths {
            output.push_str(&format!("- {}\n", path));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::WeekFailure;
    use std::path::PathBuf;

    fn vault() -> FileSystemVault {
        FileSystemVault::new(PathBuf::from("/vault"))
    }

    #[test]
    fn test_format_nothing_to_do() {
        let report = WeeklyReport {
            year: 2024,
            ..WeeklyReport::default()
        };
        assert_eq!(
            format_weekly_report(&report, &vault(), false),
            "No notes found for year 2024\n"
        );
    }

    #[test]
    fn test_format_weekly_report() {
        let report = WeeklyReport {
            year: 2024,
            written: vec![PathBuf::from("/vault/2024/weeks/2024weekly02.md")],
            failed: vec![WeekFailure {
                path: PathBuf::from("/vault/2024/weeks/2024weekly01.md"),
                error: "denied".to_string(),
            }],
            skipped: vec![PathBuf::from("/vault/2024/2024-02-30.md")],
            year_missing: false,
        };

        let quiet = format_weekly_report(&report, &vault(), false);
        assert!(quiet.contains("Updated weekly file: 2024/weeks/2024weekly02.md"));
        assert!(quiet.contains("Failed weekly file: 2024/weeks/2024weekly01.md (denied)"));
        assert!(!quiet.contains("2024-02-30"));

        let verbose = format_weekly_report(&report, &vault(), true);
        assert!(verbose.contains("Skipped (invalid date): 2024/2024-02-30.md"));
    }

    #[test]
    fn test_format_fix_report() {
        let report = FixSpacesReport {
            fixed: vec![PathBuf::from("/vault/2024/2024-01-01.md")],
            unchanged: vec![PathBuf::from("/vault/2024/2024-01-02.md")],
            failed: vec![],
        };
        let output = format_fix_report(&report, &vault());
        assert!(output.contains("Normalized: 2024/2024-01-01.md"));
        assert!(output.contains("1 normalized, 1 already tidy, 0 failed"));
    }

    #[test]
    fn test_format_empty_clean_report() {
        assert_eq!(
            format_clean_report(&CleanReport::default(), &vault()),
            "No weeks directories found\n"
        );
    }

    #[test]
    fn test_format_check_report() {
        let report = ConsistencyReport {
            invalid_notes: vec!["2024/draft.md".to_string()],
            duplicate_notes: vec![],
            invalid_assets: vec!["2024/assets/a.png".to_string()],
        };
        let output = format_check_report(&report);
        assert_eq!(
            output,
            "Notes with invalid names:\n- 2024/draft.md\n\
             Assets with invalid names:\n- 2024/assets/a.png\n"
        );
        assert_eq!(
            format_check_report(&ConsistencyReport::default()),
            "Vault is consistent\n"
        );
    }
}
