//! Fluent assertion API for parsed documents
//!
//! Tests should check what a document parsed into through these helpers rather than
//! comparing debug strings, so that failures point at the line and the property that is off.
//!
//! ```ignore
//! let parser = parse_document("# Title\n* item\n");
//! assert_lines(parser.lines())
//!     .count(2)
//!     .line(0, |l| { l.heading(1).data("Title"); })
//!     .line(1, |l| { l.line_type(LineType::UnorderedList).data("item"); });
//! ```

use crate::gemtext::ast::{Line, LineType};
use crate::gemtext::toc::TocEntry;

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a line sequence
pub fn assert_lines(lines: &[Line]) -> LinesAssertion<'_> {
    LinesAssertion { lines }
}

/// Create an assertion builder for a table of contents
pub fn assert_toc(entries: &[TocEntry]) -> TocAssertion<'_> {
    TocAssertion { entries }
}

// ============================================================================
// Line Assertions
// ============================================================================

pub struct LinesAssertion<'a> {
    lines: &'a [Line],
}

impl<'a> LinesAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.lines.len(),
            expected,
            "Expected {} lines, found {}: {:#?}",
            expected,
            self.lines.len(),
            self.lines
        );
        self
    }

    /// Run assertions against the line at `index`
    pub fn line<F, R>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>) -> R,
    {
        let line = self.lines.get(index).unwrap_or_else(|| {
            panic!(
                "Line index {} out of bounds ({} lines)",
                index,
                self.lines.len()
            )
        });
        check(LineAssertion {
            line,
            context: format!("line[{}]", index),
        });
        self
    }

    /// Assert the sequence of true line types
    pub fn types(self, expected: &[LineType]) -> Self {
        let actual: Vec<LineType> = self.lines.iter().map(Line::line_type).collect();
        assert_eq!(actual, expected, "Line types differ");
        self
    }
}

pub struct LineAssertion<'a> {
    line: &'a Line,
    context: String,
}

impl LineAssertion<'_> {
    pub fn line_type(self, expected: LineType) -> Self {
        assert_eq!(
            self.line.line_type(),
            expected,
            "{}: Expected {}, found {:?}",
            self.context,
            expected,
            self.line
        );
        self
    }

    pub fn core_type(self, expected: LineType) -> Self {
        assert_eq!(
            self.line.core_type(),
            expected,
            "{}: Expected core type {}, found {:?}",
            self.context,
            expected,
            self.line
        );
        self
    }

    /// Assert this is a heading at `level`
    pub fn heading(self, level: usize) -> Self {
        let this = self.line_type(LineType::Heading);
        assert_eq!(
            this.line.level(),
            level,
            "{}: Expected heading level {}",
            this.context,
            level
        );
        this
    }

    pub fn data(self, expected: &str) -> Self {
        assert_eq!(
            self.line.data(),
            expected,
            "{}: data mismatch in {:?}",
            self.context,
            self.line
        );
        self
    }

    pub fn meta(self, expected: &str) -> Self {
        assert_eq!(
            self.line.meta(),
            expected,
            "{}: meta mismatch in {:?}",
            self.context,
            self.line
        );
        self
    }

    pub fn prefix(self, expected: &str) -> Self {
        assert_eq!(
            self.line.prefix(),
            expected,
            "{}: prefix mismatch in {:?}",
            self.context,
            self.line
        );
        self
    }

    /// Assert the canonical string form
    pub fn renders_as(self, expected: &str) -> Self {
        assert_eq!(
            self.line.to_string(),
            expected,
            "{}: canonical form mismatch",
            self.context
        );
        self
    }
}

// ============================================================================
// TOC Assertions
// ============================================================================

pub struct TocAssertion<'a> {
    entries: &'a [TocEntry],
}

impl TocAssertion<'_> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.entries.len(),
            expected,
            "Expected {} TOC entries, found {:#?}",
            expected,
            self.entries
        );
        self
    }

    /// Assert the section counters, numbered form and heading text of one entry
    pub fn entry(self, index: usize, section: [usize; 3], numbered: &str, text: &str) -> Self {
        let entry = self.entries.get(index).unwrap_or_else(|| {
            panic!(
                "TOC index {} out of bounds ({} entries)",
                index,
                self.entries.len()
            )
        });
        assert_eq!(entry.section.0, section, "toc[{}]: section mismatch", index);
        assert_eq!(entry.numbered(), numbered, "toc[{}]: numbering", index);
        assert_eq!(entry.text(), text, "toc[{}]: heading text", index);
        self
    }

    /// Assert the numbered form of every entry, in order
    pub fn numbered(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.entries.iter().map(TocEntry::numbered).collect();
        assert_eq!(actual, expected, "TOC numbering differs");
        self
    }
}
