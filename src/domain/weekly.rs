//! Weekly aggregation: grouping notes into Monday-start weeks and merging
//! their sections into one document per week.

use super::naming::week_start;
use super::sections::{OrderedSections, Section, SectionRules};
use chrono::{Datelike, Duration, NaiveDate};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A daily note file that passed strict date validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// Path relative to the year directory, `/`-separated
    pub relative: String,
}

impl NoteRef {
    pub fn new(date: NaiveDate, path: PathBuf, relative: impl Into<String>) -> Self {
        NoteRef {
            date,
            path,
            relative: relative.into(),
        }
    }

    pub fn filename(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(&self.relative)
    }

    /// Link target as seen from the weeks directory, one level deeper
    pub fn link_from_weeks_dir(&self) -> String {
        format!("../{}", self.relative)
    }
}

/// A parsed daily note
#[derive(Debug, Clone)]
pub struct DailyNote {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub sections: Vec<Section>,
}

/// The notes of one Monday-Sunday span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    /// Number of the week within the target year, see [`week_number_in`]
    pub week_number: u32,
    pub members: Vec<NoteRef>,
}

impl WeekBucket {
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(6)
    }
}

/// Last ISO week of `year` (52 or 53); December 28 always falls in it
fn last_iso_week(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28).map_or(52, |d| d.iso_week().week())
}

/// Number of the week starting on `week_start` within `year`.
///
/// Weeks of the year's own ISO calendar keep their ISO number. A leading
/// week owned by the previous ISO year is week 0, and a trailing week that
/// already is week 1 of the next ISO year continues after the last ISO week.
/// Distinct weeks of one year therefore never share a number.
///
/// # Examples
///
/// ```
/// use weeklog::domain::weekly::week_number_in;
/// use chrono::NaiveDate;
///
/// let monday = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// assert_eq!(week_number_in(monday(1, 1), 2024), 1);
/// assert_eq!(week_number_in(monday(12, 30), 2024), 53);
/// ```
pub fn week_number_in(week_start: NaiveDate, year: i32) -> u32 {
    let iso = week_start.iso_week();
    match iso.year().cmp(&year) {
        Ordering::Equal => iso.week(),
        Ordering::Less => 0,
        Ordering::Greater => last_iso_week(year) + 1,
    }
}

/// Group the notes of `year` by the Monday of their week.
///
/// Buckets come back in ascending week order; members of each bucket are
/// sorted by file name, which is chronological for `YYYY-MM-DD.md`.
pub fn group_by_week(notes: impl IntoIterator<Item = NoteRef>, year: i32) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, Vec<NoteRef>> = BTreeMap::new();
    for note in notes {
        buckets.entry(week_start(note.date)).or_default().push(note);
    }

    buckets
        .into_iter()
        .map(|(week_start, mut members)| {
            members.sort_by(|a, b| {
                a.filename()
                    .cmp(b.filename())
                    .then_with(|| a.relative.cmp(&b.relative))
            });
            WeekBucket {
                week_start,
                week_number: week_number_in(week_start, year),
                members,
            }
        })
        .collect()
}

/// Rewrites `](assets/` links for a document one directory deeper
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    pattern: Regex,
    replacement: String,
}

impl LinkRewriter {
    pub fn new(assets_dir: &str) -> Self {
        let pattern = Regex::new(&format!(r"\]\({}/", regex::escape(assets_dir)))
            .expect("escaped asset pattern is a valid regex");
        LinkRewriter {
            pattern,
            replacement: format!("](../{}/", assets_dir),
        }
    }

    pub fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.pattern
            .replace_all(line, NoExpand(self.replacement.as_str()))
    }
}

impl Default for LinkRewriter {
    fn default() -> Self {
        LinkRewriter::new("assets")
    }
}

/// Merges the sections of a week's notes in first-seen order
pub struct WeeklyMerger<'a> {
    rules: &'a SectionRules,
    links: &'a LinkRewriter,
    sections: OrderedSections,
}

impl<'a> WeeklyMerger<'a> {
    pub fn new(rules: &'a SectionRules, links: &'a LinkRewriter) -> Self {
        WeeklyMerger {
            rules,
            links,
            sections: OrderedSections::new(),
        }
    }

    /// Append one note; notes must be absorbed in ascending file name order
    pub fn absorb(&mut self, note: &DailyNote) {
        for section in &note.sections {
            let idx = self.sections.entry(&section.heading);
            for line in &section.body_lines {
                let mut line = self.links.rewrite(line).into_owned();
                if !line.ends_with('\n') {
                    line.push('\n');
                }
                self.sections.push_line(idx, line);
            }
        }
    }

    pub fn finish(self, bucket: &WeekBucket) -> WeeklyDocument {
        let unsorted = &self.rules.unsorted;
        let sections = self
            .sections
            .into_vec()
            .into_iter()
            .filter(|s| !(s.heading == *unsorted && s.is_blank()))
            .collect();

        WeeklyDocument {
            week_number: bucket.week_number,
            week_start: bucket.week_start,
            week_end: bucket.week_end(),
            note_links: bucket
                .members
                .iter()
                .map(|m| NoteLink {
                    label: m.date.format("%Y-%m-%d").to_string(),
                    target: m.link_from_weeks_dir(),
                })
                .collect(),
            sections,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLink {
    pub label: String,
    pub target: String,
}

/// Synthetic document covering one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyDocument {
    pub week_number: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub note_links: Vec<NoteLink>,
    pub sections: Vec<Section>,
}

impl WeeklyDocument {
    pub fn render(&self) -> String {
        let mut output = format!(
            "# Week {} ({} - {})\n\n",
            self.week_number,
            self.week_start.format("%Y-%m-%d"),
            self.week_end.format("%Y-%m-%d")
        );

        for link in &self.note_links {
            output.push_str(&format!("- [{}]({})\n", link.label, link.target));
        }
        output.push('\n');

        for section in &self.sections {
            output.push_str(&section.heading);
            output.push('\n');
            for line in &section.body_lines {
                output.push_str(line);
            }
        }

        output
    }
}
