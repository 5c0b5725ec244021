//! Line type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a gemtext line.
///
/// Used both for the true type of a node and for its core type, where headings, list
/// items and quotes collapse into [LineType::Text].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// Plain text (paragraph content, or an empty paragraph break)
    Text,

    /// Link line: `=> target [name]`
    Link,

    /// Three backticks, opening or closing a preformatted block
    PreformatToggle,

    /// Verbatim content inside a preformatted block
    Preformat,

    /// Heading, level 1 to 3
    Heading,

    /// Unordered list entry: `* item`
    UnorderedList,

    /// Quote line: `> text`
    Quote,
}

impl LineType {
    /// Whether this type is one of the four core types a minimal consumer must handle.
    pub fn is_core(self) -> bool {
        matches!(
            self,
            LineType::Text | LineType::Link | LineType::PreformatToggle | LineType::Preformat
        )
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Text => "TEXT",
            LineType::Link => "LINK",
            LineType::PreformatToggle => "PREFORMAT_TOGGLE",
            LineType::Preformat => "PREFORMAT",
            LineType::Heading => "HEADING",
            LineType::UnorderedList => "UNORDERED_LIST",
            LineType::Quote => "QUOTE",
        };
        write!(f, "{}", name)
    }
}
