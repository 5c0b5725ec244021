//! Structured dumps (JSON, YAML)
//!
//! Both formats serialize the same shape:
//!
//!     { title, toc: [{ section, numbered, text, index }], lines: [{ type, ... }] }

use super::{DocumentView, Format, FormatError};
use crate::gemtext::ast::Line;
use crate::gemtext::toc::SectionNumber;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SerializedDocument<'a> {
    title: &'a str,
    toc: Vec<SerializedTocEntry<'a>>,
    lines: &'a [Line],
}

#[derive(Debug, Serialize)]
struct SerializedTocEntry<'a> {
    section: SectionNumber,
    numbered: String,
    text: &'a str,
    index: usize,
}

impl<'a> SerializedDocument<'a> {
    fn new(doc: &DocumentView<'a>) -> Self {
        Self {
            title: doc.title,
            toc: doc
                .toc
                .iter()
                .map(|entry| SerializedTocEntry {
                    section: entry.section,
                    numbered: entry.numbered(),
                    text: entry.text(),
                    index: entry.index,
                })
                .collect(),
            lines: doc.lines,
        }
    }
}

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON of the title, table of contents and lines"
    }

    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(&SerializedDocument::new(doc))
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML of the title, table of contents and lines"
    }

    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
        serde_yaml::to_string(&SerializedDocument::new(doc))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
