//! Canonical gemtext output
//!
//! Writes every node back in its canonical form (prefix, one space, data). Toggles are
//! written as three backticks followed by their alt text, preformatted lines verbatim, so
//! the output parses back to the same nodes.

use super::{DocumentView, Format, FormatError};
use crate::gemtext::ast::LineType;

pub struct GemtextFormat;

impl Format for GemtextFormat {
    fn name(&self) -> &str {
        "gemtext"
    }

    fn description(&self) -> &str {
        "Canonical text/gemini re-serialization"
    }

    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
        let mut out = String::new();
        for line in doc.lines {
            if line.line_type() == LineType::PreformatToggle {
                out.push_str(line.prefix());
                out.push_str(line.data());
            } else {
                out.push_str(&line.to_string());
            }
            out.push('\n');
        }
        Ok(out)
    }
}
