//! Integration tests for the clean-weeks command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{weeklog_cmd, write_file};

#[test]
fn test_clean_weeks_after_generation() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "2024/2024-01-01.md", "## note\nhello\n");

    weeklog_cmd()
        .arg("--vault")
        .arg(temp.path())
        .args(["week", "2024"])
        .assert()
        .success();
    assert!(temp.path().join("2024/weeks").exists());

    weeklog_cmd()
        .arg("--vault")
        .arg(temp.path())
        .arg("clean-weeks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: 2024/weeks"));

    assert!(!temp.path().join("2024/weeks").exists());
    assert!(temp.path().join("2024/2024-01-01.md").exists());
}

#[test]
fn test_clean_weeks_single_year() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "2023/weeks/2023weekly52.md", "x");
    write_file(temp.path(), "2024/weeks/2024weekly01.md", "x");

    weeklog_cmd()
        .arg("--vault")
        .arg(temp.path())
        .args(["clean-weeks", "--year", "2023"])
        .assert()
        .success();

    assert!(!temp.path().join("2023/weeks").exists());
    assert!(temp.path().join("2024/weeks").exists());
}

#[test]
fn test_clean_weeks_empty_vault() {
    let temp = TempDir::new().unwrap();

    weeklog_cmd()
        .arg("--vault")
        .arg(temp.path())
        .arg("clean-weeks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No weeks directories found"));
}
