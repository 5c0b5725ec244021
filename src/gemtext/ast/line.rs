//! Line node
//!
//! A [Line] is one classified line of a gemtext document. The variants carry their own
//! payloads, but consumers are expected to go through the accessor methods rather than
//! matching on the variants, so that renderers work the same way for every kind.
//!
//! Examples (source line → node):
//!     `=> gemini://example.org Example` → Link { target: "gemini://example.org", name: "Example" }
//!     `## Setup`                        → Heading { level: 2, text: "Setup" }
//!     `* milk`                          → UnorderedListItem { text: "milk" }
//!     `*milk`                           → Text { text: "*milk" }

use super::line_type::LineType;
use super::MAX_HEADING_LEVEL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single classified gemtext line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    /// Plain text. Trailing whitespace is stripped, leading whitespace is kept.
    Text { text: String },

    /// Link. `target` never contains whitespace, `name` may be empty.
    Link { target: String, name: String },

    /// Opening or closing toggle. `alt` is the trimmed text after the backticks of an
    /// opening toggle, and always empty for a closing one.
    PreformatToggle { alt: String },

    /// Content inside a preformatted block, never trimmed.
    Preformat { text: String },

    /// Heading with a level in `1..=3`.
    Heading { level: usize, text: String },

    /// Unordered list entry.
    UnorderedListItem { text: String },

    /// Quote.
    Quote { text: String },
}

impl Line {
    pub fn text(text: impl Into<String>) -> Self {
        Line::Text { text: text.into() }
    }

    pub fn link(target: impl Into<String>, name: impl Into<String>) -> Self {
        Line::Link {
            target: target.into(),
            name: name.into(),
        }
    }

    pub fn preformat_toggle(alt: impl Into<String>) -> Self {
        Line::PreformatToggle { alt: alt.into() }
    }

    pub fn preformat(text: impl Into<String>) -> Self {
        Line::Preformat { text: text.into() }
    }

    /// Build a heading. The level is clamped into `1..=3`.
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Line::Heading {
            level: level.clamp(1, MAX_HEADING_LEVEL),
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Line::UnorderedListItem { text: text.into() }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Line::Quote { text: text.into() }
    }

    /// The coarse structural type: headings, list items and quotes report as Text.
    pub fn core_type(&self) -> LineType {
        match self {
            Line::Link { .. } => LineType::Link,
            Line::PreformatToggle { .. } => LineType::PreformatToggle,
            Line::Preformat { .. } => LineType::Preformat,
            Line::Text { .. }
            | Line::Heading { .. }
            | Line::UnorderedListItem { .. }
            | Line::Quote { .. } => LineType::Text,
        }
    }

    /// The true type of the line.
    pub fn line_type(&self) -> LineType {
        match self {
            Line::Text { .. } => LineType::Text,
            Line::Link { .. } => LineType::Link,
            Line::PreformatToggle { .. } => LineType::PreformatToggle,
            Line::Preformat { .. } => LineType::Preformat,
            Line::Heading { .. } => LineType::Heading,
            Line::UnorderedListItem { .. } => LineType::UnorderedList,
            Line::Quote { .. } => LineType::Quote,
        }
    }

    /// Heading level, or 0 for anything that is not a heading.
    pub fn level(&self) -> usize {
        match self {
            Line::Heading { level, .. } => *level,
            _ => 0,
        }
    }

    /// Primary payload: the target for links, the content for everything else.
    pub fn data(&self) -> &str {
        match self {
            Line::Text { text }
            | Line::Preformat { text }
            | Line::Heading { text, .. }
            | Line::UnorderedListItem { text }
            | Line::Quote { text } => text,
            Line::Link { target, .. } => target,
            Line::PreformatToggle { alt } => alt,
        }
    }

    /// Secondary payload: the display name for links, empty otherwise.
    pub fn meta(&self) -> &str {
        match self {
            Line::Link { name, .. } => name,
            _ => "",
        }
    }

    /// The marker that introduces this kind of line, empty for Text and Preformat.
    pub fn prefix(&self) -> &'static str {
        match self {
            Line::Text { .. } | Line::Preformat { .. } => "",
            Line::Link { .. } => "=>",
            Line::PreformatToggle { .. } => "```",
            Line::Heading { level, .. } => match level {
                0 => "",
                1 => "#",
                2 => "##",
                _ => "###",
            },
            Line::UnorderedListItem { .. } => "*",
            Line::Quote { .. } => ">",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Line::Heading { .. })
    }

    /// An empty Text line, which presentation layers treat as a paragraph break.
    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Text { text } if text.is_empty())
    }
}

/// Canonical string form: prefix, one space, data.
///
/// Links render as `=> target` or `=> target name`. Text, Preformat and PreformatToggle
/// render their bare data.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Text { text } | Line::Preformat { text } => write!(f, "{}", text),
            Line::PreformatToggle { alt } => write!(f, "{}", alt),
            Line::Link { target, name } => {
                write!(f, "{} {}", self.prefix(), target)?;
                if !name.is_empty() {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
            Line::Heading { text, .. }
            | Line::UnorderedListItem { text }
            | Line::Quote { text } => write!(f, "{} {}", self.prefix(), text),
        }
    }
}
