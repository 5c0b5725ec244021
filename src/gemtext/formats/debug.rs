//! Debug dump
//!
//! One line per node, tagged with a short type label, so that classification problems are
//! easy to spot. The numbered TOC is printed first, followed by a blank line.
//!
//! Example:
//!
//!     1.	# Title
//!     1.1.	## Part
//!
//!     H1:   Title
//!     TEXT: some text
//!     LINK: Home (gemini://example.org/)
//!     PFTT: rust
//!     	fn main() {}
//!     PFTT: ; PFT:
//!     H2:   Part
//!     LIST: item
//!     QUOT: quoted
//!
//! Preformat lines inside a block are indented with a tab. A Preformat line seen while no
//! block is open is flagged with `PFT:` instead.

use super::{DocumentView, Format, FormatError};
use crate::gemtext::ast::LineType;
use crate::gemtext::config::DebugConfig;
use std::fmt::Write;

pub struct DebugFormat {
    config: DebugConfig,
}

impl DebugFormat {
    pub fn new(config: DebugConfig) -> Self {
        Self { config }
    }
}

impl Default for DebugFormat {
    fn default() -> Self {
        Self::new(DebugConfig { show_toc: true })
    }
}

impl Format for DebugFormat {
    fn name(&self) -> &str {
        "debug"
    }

    fn description(&self) -> &str {
        "Tagged line-by-line dump of the parsed document"
    }

    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
        render(doc, self.config.show_toc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

fn render(doc: &DocumentView<'_>, show_toc: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if show_toc {
        for entry in doc.toc {
            writeln!(out, "{}\t{}", entry.numbered(), entry.heading)?;
        }
        writeln!(out)?;
    }

    let mut in_block = false;
    for line in doc.lines {
        match line.line_type() {
            LineType::Text => writeln!(out, "TEXT: {}", line.data())?,
            LineType::Link => writeln!(out, "LINK: {} ({})", line.meta(), line.data())?,
            LineType::PreformatToggle => {
                write!(out, "PFTT: {}", line.data())?;
                if in_block {
                    write!(out, "; PFT:")?;
                }
                writeln!(out)?;
                in_block = !in_block;
            }
            LineType::Preformat => {
                if in_block {
                    writeln!(out, "\t{}", line.data())?;
                } else {
                    writeln!(out, "PFT:  {}", line.data())?;
                }
            }
            LineType::Heading => writeln!(out, "H{}:   {}", line.level(), line.data())?,
            LineType::UnorderedList => writeln!(out, "LIST: {}", line.data())?,
            LineType::Quote => writeln!(out, "QUOT: {}", line.data())?,
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemtext::ast::Line;
    use crate::gemtext::parsing::{parse_document, Parser};

    fn dump(source: &str, show_toc: bool) -> String {
        let mut parser = parse_document(source);
        let view = DocumentView::from_parser(&mut parser);
        DebugFormat::new(DebugConfig { show_toc })
            .serialize(&view)
            .unwrap()
    }

    #[test]
    fn test_toc_block_then_lines() {
        let out = dump("# A\n### B\n", true);
        assert_eq!(out, "1.\t# A\n1.0.1.\t### B\n\nH1:   A\nH3:   B\n");
    }

    #[test]
    fn test_toc_block_can_be_hidden() {
        assert_eq!(dump("# A\n", false), "H1:   A\n");
    }

    #[test]
    fn test_preformat_block_markers() {
        let out = dump("```sh\n  ls\n```\n", false);
        assert_eq!(out, "PFTT: sh\n\t  ls\nPFTT: ; PFT:\n");
    }

    #[test]
    fn test_stray_preformat_line_is_flagged() {
        let mut parser = Parser::new();
        parser.lines_mut().push(Line::preformat("loose"));
        let view = DocumentView::from_parser(&mut parser);
        let out = DebugFormat::default().serialize(&view).unwrap();
        assert_eq!(out, "\nPFT:  loose\n");
    }

    #[test]
    fn test_links_with_and_without_names() {
        let out = dump("=> /a\n=> /b Bee\n", false);
        assert_eq!(out, "LINK:  (/a)\nLINK: Bee (/b)\n");
    }
}
