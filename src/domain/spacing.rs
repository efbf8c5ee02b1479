//! Blank-line normalization for notes
//!
//! Single forward pass: every line is classified and the decision to insert
//! or drop a blank line depends only on the previously emitted line.

use super::sections::split_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Blank,
    Heading,
    ListItem,
    Other,
}

fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineClass::Blank
    } else if trimmed.starts_with('#') {
        LineClass::Heading
    } else if trimmed.starts_with("- ") || trimmed.starts_with("[ ]") {
        LineClass::ListItem
    } else {
        LineClass::Other
    }
}

/// Blank line using the same terminator as `line`
fn blank_for(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Normalize the blank lines of a note.
///
/// - headings get a blank line before them (unless first)
/// - list items get a blank line before them unless they continue a list
/// - the first plain line after a heading or list gets a blank line
/// - runs of blank lines collapse into one, leading blank lines are dropped
///
/// Applying it to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use weeklog::domain::spacing::normalize;
///
/// let fixed = normalize("# Title\n## note\n\n\n\ntext\n- a\n- b\nafter\n");
/// assert_eq!(fixed, "# Title\n\n## note\n\ntext\n\n- a\n- b\n\nafter\n");
/// assert_eq!(normalize(&fixed), fixed);
/// ```
pub fn normalize(content: &str) -> String {
    let mut output = String::with_capacity(content.len() + 16);
    // Start of file behaves like a preceding blank line
    let mut previous = LineClass::Blank;

    for line in split_lines(content) {
        let class = classify(line);
        let needs_blank = match class {
            LineClass::Blank => {
                if previous != LineClass::Blank {
                    output.push_str(line);
                }
                previous = LineClass::Blank;
                continue;
            }
            LineClass::Heading => previous != LineClass::Blank,
            LineClass::ListItem => {
                matches!(previous, LineClass::Heading | LineClass::Other)
            }
            LineClass::Other => {
                matches!(previous, LineClass::Heading | LineClass::ListItem)
            }
        };

        if needs_blank {
            output.push_str(blank_for(line));
        }
        output.push_str(line);
        previous = class;
    }

    output
}
