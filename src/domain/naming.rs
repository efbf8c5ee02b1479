//! Vault file naming rules for daily notes, weekly documents and assets

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Daily note names: YYYY-MM-DD.md
fn day_note_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.md$").unwrap())
}

/// Weekly document names: YYYYweeklyWW.md
fn weekly_note_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}weekly\d{2}\.md$").unwrap())
}

/// Asset names: YYYY-MM-DD-anything.ext
fn asset_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-.+\..+$").unwrap())
}

/// Check the lexical daily note grammar (does not validate the calendar date)
pub fn is_day_note_name(filename: &str) -> bool {
    day_note_regex().is_match(filename)
}

/// Check whether a file name belongs to generated weekly output
pub fn is_weekly_note_name(filename: &str, weekly_prefix: &str) -> bool {
    (!weekly_prefix.is_empty() && filename.starts_with(weekly_prefix))
        || weekly_note_regex().is_match(filename)
}

pub fn is_asset_name(filename: &str) -> bool {
    asset_regex().is_match(filename)
}

/// Parse the date of a daily note file name.
///
/// Returns `None` when the name does not follow the grammar or names an
/// impossible calendar day (e.g. `2024-02-30.md`).
///
/// # Examples
///
/// ```
/// use weeklog::domain::naming::date_from_filename;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     date_from_filename("2024-01-02.md"),
///     NaiveDate::from_ymd_opt(2024, 1, 2)
/// );
/// assert_eq!(date_from_filename("2024-02-30.md"), None);
/// ```
pub fn date_from_filename(filename: &str) -> Option<NaiveDate> {
    if !is_day_note_name(filename) {
        return None;
    }
    let stem = filename.strip_suffix(".md")?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Monday on or before the given date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// File name of the weekly document for an ISO week of the target year
pub fn weekly_filename(year: i32, week_number: u32) -> String {
    format!("{}weekly{:02}.md", year, week_number)
}
