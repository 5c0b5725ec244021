//! HTML output
//!
//! Mapping:
//!     Text               <p>text</p>
//!     empty Text         paragraph break; a run of n empty lines emits n-1 <br>
//!     Link               <a href="target">name or target</a>
//!     PreformatToggle    opens / closes <pre>
//!     Preformat          escaped line inside <pre>
//!     Heading            <hN>, wrapped in <a name="..."> when heading anchors are on
//!     UnorderedListItem  <li>, consecutive items grouped in one <ul>
//!     Quote              <blockquote>
//!
//! Text and attribute values are escaped. Anchor names are the form-urlencoded heading text.
//! A list or preformatted block still open at the end of the document is closed.

use super::{DocumentView, Format, FormatError};
use crate::gemtext::ast::{Line, LineType};
use crate::gemtext::config::HtmlConfig;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

pub struct HtmlFormat {
    config: HtmlConfig,
}

impl HtmlFormat {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(HtmlConfig {
            standalone: false,
            include_toc: false,
            heading_anchors: true,
        })
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML contents, optionally a standalone page with a table of contents"
    }

    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
        self.render(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// Anchor name used for a heading, shared by the heading itself and the TOC links.
pub fn anchor_name(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

impl HtmlFormat {
    fn render(&self, doc: &DocumentView<'_>) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        if self.config.standalone {
            writeln!(out, "<!DOCTYPE html>")?;
            writeln!(out, "<html>")?;
            writeln!(out, "<head>")?;
            writeln!(out, "<meta charset=\"utf-8\">")?;
            writeln!(out, "<title>{}</title>", encode_text(doc.title))?;
            writeln!(out, "</head>")?;
            writeln!(out, "<body>")?;
        }
        if self.config.include_toc {
            self.render_toc(doc, &mut out)?;
        }
        self.render_contents(doc.lines, &mut out)?;
        if self.config.standalone {
            writeln!(out, "</body>")?;
            writeln!(out, "</html>")?;
        }

        Ok(out)
    }

    fn render_toc(&self, doc: &DocumentView<'_>, out: &mut String) -> std::fmt::Result {
        if doc.toc.is_empty() {
            return Ok(());
        }
        writeln!(out, "<nav>")?;
        writeln!(out, "<ul>")?;
        for entry in doc.toc {
            let label = format!("{} {}", entry.numbered(), entry.text());
            if self.config.heading_anchors {
                writeln!(
                    out,
                    "<li><a href=\"#{}\">{}</a></li>",
                    encode_double_quoted_attribute(&anchor_name(entry.text())),
                    encode_text(&label)
                )?;
            } else {
                writeln!(out, "<li>{}</li>", encode_text(&label))?;
            }
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</nav>")
    }

    fn render_contents(&self, lines: &[Line], out: &mut String) -> std::fmt::Result {
        let mut in_block = false;
        let mut in_list = false;
        let mut breaks = 0usize;

        for line in lines {
            if in_list && line.line_type() != LineType::UnorderedList {
                writeln!(out, "</ul>")?;
                in_list = false;
            }
            if line.is_blank() {
                breaks += 1;
                continue;
            }
            if breaks > 0 {
                out.push_str(&"<br>\n".repeat(breaks - 1));
                breaks = 0;
            }

            match line.line_type() {
                LineType::Text => writeln!(out, "<p>{}</p>", encode_text(line.data()))?,
                LineType::Link => {
                    let name = if line.meta().is_empty() {
                        line.data()
                    } else {
                        line.meta()
                    };
                    writeln!(
                        out,
                        "<a href=\"{}\">{}</a>",
                        encode_double_quoted_attribute(line.data()),
                        encode_text(name)
                    )?;
                }
                LineType::PreformatToggle => {
                    if in_block {
                        writeln!(out, "</pre>")?;
                    } else {
                        out.push_str("<pre>");
                    }
                    in_block = !in_block;
                }
                LineType::Preformat => writeln!(out, "{}", encode_text(line.data()))?,
                LineType::Heading => {
                    let level = line.level();
                    let heading = format!("<h{level}>{}</h{level}>", encode_text(line.data()));
                    if self.config.heading_anchors {
                        writeln!(
                            out,
                            "<a name=\"{}\">{}</a>",
                            encode_double_quoted_attribute(&anchor_name(line.data())),
                            heading
                        )?;
                    } else {
                        writeln!(out, "{}", heading)?;
                    }
                }
                LineType::UnorderedList => {
                    if !in_list {
                        writeln!(out, "<ul>")?;
                        in_list = true;
                    }
                    writeln!(out, "<li>{}</li>", encode_text(line.data()))?;
                }
                LineType::Quote => {
                    writeln!(out, "<blockquote>{}</blockquote>", encode_text(line.data()))?
                }
            }
        }

        if in_list {
            writeln!(out, "</ul>")?;
        }
        if in_block {
            writeln!(out, "</pre>")?;
        }
        Ok(())
    }
}
