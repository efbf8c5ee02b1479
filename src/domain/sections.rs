//! Section extraction from daily notes
//!
//! A note is read line by line. `# ` title lines are dropped, `## ` headings
//! open a section, and every other line is appended to the section that is
//! currently open. Reserved headings (tags, next, refs) suppress their body.

use std::collections::HashMap;

/// Second-level heading marker that opens a section
pub const HEADING_MARKER: &str = "## ";

/// Top-level title marker, never merged
pub const TITLE_MARKER: &str = "# ";

/// Split text into lines, keeping each line's terminator
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// A heading plus the raw body lines that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body_lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Section {
            heading: heading.into(),
            body_lines: Vec::new(),
        }
    }

    /// True when the body has no visible content
    pub fn is_blank(&self) -> bool {
        self.body_lines.iter().all(|line| line.trim().is_empty())
    }
}

/// Heading keys with special meaning during extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRules {
    /// Headings whose body is discarded (compared after trimming)
    pub reserved: Vec<String>,
    /// Key collecting body lines that precede any heading
    pub unsorted: String,
}

impl Default for SectionRules {
    fn default() -> Self {
        SectionRules {
            reserved: vec![
                "## tags".to_string(),
                "## next".to_string(),
                "## refs".to_string(),
            ],
            unsorted: "## unsorted".to_string(),
        }
    }
}

impl SectionRules {
    pub fn is_reserved(&self, heading: &str) -> bool {
        self.reserved.iter().any(|r| r == heading)
    }
}

/// Sections in first-seen order, one entry per heading key
#[derive(Debug, Clone, Default)]
pub struct OrderedSections {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl OrderedSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the section for `heading`, created at the end if new
    pub fn entry(&mut self, heading: &str) -> usize {
        if let Some(&idx) = self.index.get(heading) {
            return idx;
        }
        let idx = self.sections.len();
        self.sections.push(Section::new(heading));
        self.index.insert(heading.to_string(), idx);
        idx
    }

    pub fn push_line(&mut self, idx: usize, line: impl Into<String>) {
        self.sections[idx].body_lines.push(line.into());
    }

    pub fn into_vec(self) -> Vec<Section> {
        self.sections
    }
}

/// How a single note line is treated by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Title,
    Heading(&'a str),
    Body,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with(TITLE_MARKER) {
        LineKind::Title
    } else if trimmed.starts_with(HEADING_MARKER) {
        LineKind::Heading(trimmed)
    } else {
        LineKind::Body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractState {
    /// Before any heading; body goes to the unsorted key
    NoActiveSection,
    /// Inside a normal section (index into the accumulator)
    ActiveSection(usize),
    /// Inside a reserved section; body is discarded
    Suppressed,
}

/// Splits one note into ordered sections
pub struct SectionExtractor<'a> {
    rules: &'a SectionRules,
}

impl<'a> SectionExtractor<'a> {
    pub fn new(rules: &'a SectionRules) -> Self {
        SectionExtractor { rules }
    }

    /// Extract the sections of one note.
    ///
    /// Sections come back in the order their key was first created. The
    /// unsorted section is created by its first body line, named sections
    /// by their heading line. Repeated headings share one section.
    ///
    /// # Examples
    ///
    /// ```
    /// use weeklog::domain::sections::{SectionExtractor, SectionRules};
    ///
    /// let rules = SectionRules::default();
    /// let lines = ["# 01-01-2024\n", "## work\n", "shipped\n", "## tags\n", "- x\n"];
    /// let sections = SectionExtractor::new(&rules).extract(lines);
    ///
    /// assert_eq!(sections.len(), 1);
    /// assert_eq!(sections[0].heading, "## work");
    /// assert_eq!(sections[0].body_lines, vec!["shipped\n"]);
    /// ```
    pub fn extract<'l, I>(&self, lines: I) -> Vec<Section>
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut sections = OrderedSections::new();
        let mut state = ExtractState::NoActiveSection;

        for line in lines {
            match classify(line) {
                LineKind::Title => {}
                LineKind::Heading(key) => {
                    state = if self.rules.is_reserved(key) {
                        ExtractState::Suppressed
                    } else {
                        ExtractState::ActiveSection(sections.entry(key))
                    };
                }
                LineKind::Body => match state {
                    ExtractState::ActiveSection(idx) => sections.push_line(idx, line),
                    ExtractState::NoActiveSection => {
                        let idx = sections.entry(&self.rules.unsorted);
                        sections.push_line(idx, line);
                    }
                    ExtractState::Suppressed => {}
                },
            }
        }

        sections.into_vec()
    }

    /// Convenience wrapper over [`SectionExtractor::extract`] for whole file contents
    pub fn extract_str(&self, content: &str) -> Vec<Section> {
        self.extract(split_lines(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<Section> {
        let rules = SectionRules::default();
        SectionExtractor::new(&rules).extract_str(content)
    }

    fn headings(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.heading.as_str()).collect()
    }

    #[test]
    fn test_title_is_dropped() {
        let sections = extract("# 01-01-2024\n## note\nhello\n");
        assert_eq!(headings(&sections), vec!["## note"]);
        assert_eq!(sections[0].body_lines, vec!["hello\n"]);
    }

    #[test]
    fn test_content_before_heading_goes_to_unsorted() {
        let sections = extract("loose line\n## work\nfocused\n");
        assert_eq!(headings(&sections), vec!["## unsorted", "## work"]);
        assert_eq!(sections[0].body_lines, vec!["loose line\n"]);
    }

    #[test]
    fn test_title_does_not_change_state() {
        let sections = extract("## work\nbefore\n# stray title\nafter\n");
        assert_eq!(headings(&sections), vec!["## work"]);
        assert_eq!(sections[0].body_lines, vec!["before\n", "after\n"]);
    }

    #[test]
    fn test_reserved_sections_are_suppressed() {
        let sections = extract("## tags\n- work\n## next\n- call bob\n## refs\nlink\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_reserved_heading_with_trailing_spaces() {
        let sections = extract("## note\nkeep\n## tags   \n- dropped\n");
        assert_eq!(headings(&sections), vec!["## note"]);
        assert_eq!(sections[0].body_lines, vec!["keep\n"]);
    }

    #[test]
    fn test_section_after_reserved_resumes_collection() {
        let sections = extract("## tags\n- x\n## ideas\nnew idea\n");
        assert_eq!(headings(&sections), vec!["## ideas"]);
        assert_eq!(sections[0].body_lines, vec!["new idea\n"]);
    }

    #[test]
    fn test_repeated_heading_appends_to_same_section() {
        let sections = extract("## work\none\n## misc\nx\n## work\ntwo\n");
        assert_eq!(headings(&sections), vec!["## work", "## misc"]);
        assert_eq!(sections[0].body_lines, vec!["one\n", "two\n"]);
    }

    #[test]
    fn test_deeper_headings_are_body_lines() {
        let sections = extract("## work\n### detail\ntext\n");
        assert_eq!(sections[0].body_lines, vec!["### detail\n", "text\n"]);
    }

    #[test]
    fn test_heading_keys_are_case_sensitive() {
        let sections = extract("## Work\na\n## work\nb\n");
        assert_eq!(headings(&sections), vec!["## Work", "## work"]);
    }

    #[test]
    fn test_empty_heading_creates_section() {
        let sections = extract("## empty\n## full\ntext\n");
        assert_eq!(headings(&sections), vec!["## empty", "## full"]);
        assert!(sections[0].is_blank());
    }

    #[test]
    fn test_custom_rules() {
        let rules = SectionRules {
            reserved: vec!["## private".to_string()],
            unsorted: "## misc".to_string(),
        };
        let sections =
            SectionExtractor::new(&rules).extract_str("intro\n## private\nsecret\n## tags\n#x\n");
        assert_eq!(headings(&sections), vec!["## misc", "## tags"]);
        assert_eq!(sections[1].body_lines, vec!["#x\n"]);
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a\r\n", "b\n", "\n", "c"]);
        assert!(split_lines("").is_empty());
    }
}
