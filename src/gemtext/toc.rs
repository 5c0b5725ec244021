//! Table of contents
//!
//!     Heading lines are numbered hierarchically, three levels deep. A counter per level is
//!     kept while walking the document in order: a heading at level L bumps counter L and
//!     resets every deeper counter. Each heading gets a copy of the counters at that point.
//!
//!         # Intro          1.
//!         ## Scope         1.1.
//!         ## Terms         1.2.
//!         # Usage          2.
//!         ### Flags        2.0.1.
//!
//!     A skipped level is not elided: a level 3 heading right under a level 1 heading
//!     prints an explicit `0.` for the missing level 2. Trailing zero levels are omitted.
//!
//!     The TOC is derived on demand; [Parser](crate::gemtext::parsing::Parser) caches it
//!     and only rebuilds it when asked to.

use crate::gemtext::ast::{Line, MAX_HEADING_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical section number of a heading, e.g. `[1, 2, 0]` for the second subsection of
/// the first section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionNumber(pub [usize; MAX_HEADING_LEVEL]);

impl SectionNumber {
    /// Top-level section counter.
    pub fn top(&self) -> usize {
        self.0[0]
    }

    /// Dotted form: the first counter always, then each deeper counter as long as some
    /// counter at or after it is non-zero. Zeros in the middle are printed.
    pub fn numbered(&self) -> String {
        let mut out = format!("{}.", self.0[0]);
        for index in 1..MAX_HEADING_LEVEL {
            if self.0[index..].iter().all(|&counter| counter == 0) {
                break;
            }
            out.push_str(&format!("{}.", self.0[index]));
        }
        out
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numbered())
    }
}

/// One heading in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub section: SectionNumber,
    /// Position of the heading in the parsed line sequence
    pub index: usize,
    /// Copy of the heading node taken when the TOC was built
    pub heading: Line,
}

impl TocEntry {
    pub fn numbered(&self) -> String {
        self.section.numbered()
    }

    /// The heading text.
    pub fn text(&self) -> &str {
        self.heading.data()
    }

    pub fn level(&self) -> usize {
        self.heading.level()
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.section, self.text())
    }
}

/// Scan the lines in order and number every heading.
///
/// Headings whose level falls outside `1..=3` are skipped.
pub fn build_table_of_contents(lines: &[Line]) -> Vec<TocEntry> {
    let mut counters = [0usize; MAX_HEADING_LEVEL];
    let mut entries = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if !line.is_heading() {
            continue;
        }
        let level = line.level();
        if !(1..=MAX_HEADING_LEVEL).contains(&level) {
            continue;
        }

        counters[level - 1] += 1;
        for counter in counters.iter_mut().skip(level) {
            *counter = 0;
        }

        entries.push(TocEntry {
            section: SectionNumber(counters),
            index,
            heading: line.clone(),
        });
    }

    entries
}

/// Text of the first heading whose top-level number is 1, or "" if there is none.
pub fn title_of(entries: &[TocEntry]) -> &str {
    entries
        .iter()
        .find(|entry| entry.section.top() == 1)
        .map(TocEntry::text)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers(lines: &[Line]) -> Vec<String> {
        build_table_of_contents(lines)
            .iter()
            .map(TocEntry::numbered)
            .collect()
    }

    #[rstest]
    #[case([1, 0, 0], "1.")]
    #[case([1, 1, 0], "1.1.")]
    #[case([1, 2, 3], "1.2.3.")]
    #[case([2, 0, 1], "2.0.1.")]
    #[case([0, 0, 1], "0.0.1.")]
    #[case([0, 1, 0], "0.1.")]
    #[case([0, 0, 0], "0.")]
    fn test_numbered_form(#[case] counters: [usize; 3], #[case] expected: &str) {
        assert_eq!(SectionNumber(counters).numbered(), expected);
    }

    #[test]
    fn test_nested_numbering() {
        let lines = vec![
            Line::heading(1, "Intro"),
            Line::heading(2, "Scope"),
            Line::text("body"),
            Line::heading(2, "Terms"),
            Line::heading(1, "Usage"),
            Line::heading(3, "Flags"),
        ];
        assert_eq!(numbers(&lines), ["1.", "1.1.", "1.2.", "2.", "2.0.1."]);
    }

    #[test]
    fn test_skipped_level_keeps_explicit_zero() {
        let lines = vec![Line::heading(1, "A"), Line::heading(3, "B")];
        let toc = build_table_of_contents(&lines);
        assert_eq!(toc[0].section, SectionNumber([1, 0, 0]));
        assert_eq!(toc[1].section, SectionNumber([1, 0, 1]));
        assert_eq!(toc[1].numbered(), "1.0.1.");
        assert_eq!(toc[1].to_string(), "1.0.1. B");
    }

    #[test]
    fn test_higher_heading_resets_deeper_counters() {
        let lines = vec![
            Line::heading(1, "a"),
            Line::heading(2, "b"),
            Line::heading(3, "c"),
            Line::heading(2, "d"),
            Line::heading(3, "e"),
        ];
        assert_eq!(numbers(&lines), ["1.", "1.1.", "1.1.1.", "1.2.", "1.2.1."]);
    }

    #[test]
    fn test_entries_keep_position_and_snapshot() {
        let lines = vec![Line::text("x"), Line::heading(1, "A"), Line::heading(1, "B")];
        let toc = build_table_of_contents(&lines);
        assert_eq!(toc[0].index, 1);
        assert_eq!(toc[0].section, SectionNumber([1, 0, 0]));
        assert_eq!(toc[1].index, 2);
        assert_eq!(toc[1].section, SectionNumber([2, 0, 0]));
    }

    #[test]
    fn test_out_of_range_levels_are_skipped() {
        let lines = vec![
            Line::Heading {
                level: 0,
                text: "zero".into(),
            },
            Line::heading(1, "A"),
            Line::Heading {
                level: 9,
                text: "nine".into(),
            },
        ];
        assert_eq!(numbers(&lines), ["1."]);
    }

    #[test]
    fn test_title_is_first_top_level_one() {
        let lines = vec![Line::heading(2, "sub"), Line::heading(1, "Title")];
        let toc = build_table_of_contents(&lines);
        assert_eq!(title_of(&toc), "Title");
        assert_eq!(title_of(&[]), "");
    }
}
