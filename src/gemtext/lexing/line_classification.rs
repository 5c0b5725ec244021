//! Line Classification
//!
//! Core classification logic for turning a raw line into a [Line] node.
//! The dispatch is a pure function of the line and the current [PreformatState];
//! [LineClassifier] wraps it for callers that feed lines one at a time.
//!
//! Rules, outside a preformatted block, checked in this order on the first three
//! characters (characters, not bytes):
//!
//!     - `=>`            Link: target is the first whitespace-delimited token, name is the rest
//!     - three backticks PreformatToggle (opening), the trimmed rest is the alt text
//!     - `#`             Heading: level is the number of `#` among the first three characters
//!     - `*` + space     UnorderedListItem
//!     - `>`             Quote
//!     - anything else   Text, trailing whitespace stripped
//!
//! Inside a preformatted block every line is Preformat, verbatim, except a line starting
//! with three backticks, which closes the block.
use crate::gemtext::ast::{Line, MAX_HEADING_LEVEL};

const LINK_PREFIX: &str = "=>";
const TOGGLE_PREFIX: &str = "```";

/// Whether the classifier is inside a preformatted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreformatState {
    #[default]
    Outside,
    Inside,
}

impl PreformatState {
    pub fn is_inside(self) -> bool {
        self == PreformatState::Inside
    }

    /// The state after a toggle line.
    pub fn toggled(self) -> Self {
        match self {
            PreformatState::Outside => PreformatState::Inside,
            PreformatState::Inside => PreformatState::Outside,
        }
    }
}

/// Classify one line (terminator already stripped) given the current preformat state.
///
/// Returns the node and the state to use for the next line. Only toggles change the state.
/// Classification never fails.
pub fn classify_line(line: &str, state: PreformatState) -> (Line, PreformatState) {
    let mut chars = line.chars();
    let lead = (chars.next(), chars.next(), chars.next());

    if state.is_inside() {
        return match lead {
            (Some('`'), Some('`'), Some('`')) => (Line::preformat_toggle(""), state.toggled()),
            _ => (Line::preformat(line), state),
        };
    }

    match lead {
        (Some('='), Some('>'), _) => (classify_link(line), state),
        (Some('`'), Some('`'), Some('`')) => {
            let alt = line.strip_prefix(TOGGLE_PREFIX).unwrap_or(line).trim();
            (Line::preformat_toggle(alt), state.toggled())
        }
        (Some('#'), _, _) => (classify_heading(line), state),
        (Some('*'), Some(' '), _) => (Line::list_item(line[1..].trim()), state),
        (Some('>'), _, _) => (Line::quote(line[1..].trim()), state),
        _ => (Line::text(line.trim_end()), state),
    }
}

fn classify_link(line: &str) -> Line {
    let rest = line.strip_prefix(LINK_PREFIX).unwrap_or(line).trim();
    match rest.find(char::is_whitespace) {
        Some(split) => Line::link(&rest[..split], rest[split..].trim_start()),
        None => Line::link(rest, ""),
    }
}

/// The level counts every `#` among the first three characters, so `####` is level 3 and
/// keeps one `#` in its text. Exactly `level` leading characters are skipped, whatever
/// they are: `#x#y` is level 2 with text `#y`.
fn classify_heading(line: &str) -> Line {
    let level = line
        .chars()
        .take(MAX_HEADING_LEVEL)
        .filter(|&c| c == '#')
        .count();
    let rest = match line.char_indices().nth(level) {
        Some((offset, _)) => &line[offset..],
        None => "",
    };
    Line::heading(level, rest.trim())
}

/// A stateful classifier that threads the preformat state across lines.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    state: PreformatState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a line and advances the preformat state.
    pub fn classify(&mut self, line: &str) -> Line {
        let (node, next) = classify_line(line, self.state);
        self.state = next;
        node
    }

    pub fn state(&self) -> PreformatState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemtext::ast::LineType;
    use rstest::rstest;

    fn outside(line: &str) -> Line {
        classify_line(line, PreformatState::Outside).0
    }

    #[rstest]
    #[case("", Line::text(""))]
    #[case("=>", Line::link("", ""))]
    #[case("=> ", Line::link("", ""))]
    #[case("#", Line::heading(1, ""))]
    #[case("##", Line::heading(2, ""))]
    #[case("###", Line::heading(3, ""))]
    #[case("# ", Line::heading(1, ""))]
    #[case("## ", Line::heading(2, ""))]
    #[case("### ", Line::heading(3, ""))]
    #[case("*", Line::text("*"))]
    #[case("* ", Line::list_item(""))]
    #[case(">", Line::quote(""))]
    #[case("> ", Line::quote(""))]
    fn test_classify_empty_payloads(#[case] input: &str, #[case] expected: Line) {
        assert_eq!(outside(input), expected);
    }

    #[rstest]
    #[case("=> target  Friendly Name", Line::link("target", "Friendly Name"))]
    #[case("=>gemini://a.org/", Line::link("gemini://a.org/", ""))]
    #[case("=>\t/path\t\tname ", Line::link("/path", "name"))]
    #[case("# A", Line::heading(1, "A"))]
    #[case("#A", Line::heading(1, "A"))]
    #[case("###   deep  ", Line::heading(3, "deep"))]
    #[case("####", Line::heading(3, "#"))]
    #[case("#### four", Line::heading(3, "# four"))]
    #[case("#x#y", Line::heading(2, "#y"))]
    #[case("#é# ok", Line::heading(2, "# ok"))]
    #[case("* x", Line::list_item("x"))]
    #[case("*x", Line::text("*x"))]
    #[case(">quoted", Line::quote("quoted"))]
    #[case("plain text   ", Line::text("plain text"))]
    #[case("  indented", Line::text("  indented"))]
    #[case("= not a link", Line::text("= not a link"))]
    #[case("``not a toggle", Line::text("``not a toggle"))]
    fn test_classify_outside(#[case] input: &str, #[case] expected: Line) {
        assert_eq!(outside(input), expected);
    }

    #[test]
    fn test_multibyte_lead_characters_are_text() {
        assert_eq!(outside("éé#"), Line::text("éé#"));
        assert_eq!(outside("→ arrow"), Line::text("→ arrow"));
        assert_eq!(outside("# ünïcode"), Line::heading(1, "ünïcode"));
    }

    #[test]
    fn test_heading_counts_hashes_among_first_three_characters() {
        let line = outside("#a#");
        assert_eq!(line.line_type(), LineType::Heading);
        assert_eq!(line.level(), 2);
        assert_eq!(line.data(), "#");
    }

    #[test]
    fn test_opening_toggle_keeps_alt_text() {
        let (line, state) = classify_line("```  rust code ", PreformatState::Outside);
        assert_eq!(line, Line::preformat_toggle("rust code"));
        assert_eq!(state, PreformatState::Inside);
    }

    #[test]
    fn test_inside_preformat_lines_are_verbatim() {
        for input in ["  # not a heading  ", "=> /nope", "* x", "", "\t"] {
            let (line, state) = classify_line(input, PreformatState::Inside);
            assert_eq!(line, Line::preformat(input));
            assert_eq!(state, PreformatState::Inside);
        }
    }

    #[test]
    fn test_closing_toggle_drops_trailing_text() {
        let (line, state) = classify_line("```ignored", PreformatState::Inside);
        assert_eq!(line, Line::preformat_toggle(""));
        assert_eq!(state, PreformatState::Outside);
    }

    #[test]
    fn test_classifier_threads_state() {
        let mut classifier = LineClassifier::new();
        let lines: Vec<Line> = ["```", "hello", "```", "# after"]
            .iter()
            .map(|line| classifier.classify(line))
            .collect();
        assert_eq!(
            lines,
            vec![
                Line::preformat_toggle(""),
                Line::preformat("hello"),
                Line::preformat_toggle(""),
                Line::heading(1, "after"),
            ]
        );
        assert_eq!(classifier.state(), PreformatState::Outside);
    }

    #[test]
    fn test_unclosed_block_stays_inside() {
        let mut classifier = LineClassifier::new();
        classifier.classify("```");
        classifier.classify("# still preformat");
        assert!(classifier.state().is_inside());
    }
}
