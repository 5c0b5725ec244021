//! Output formats
//!
//!     Renderers sit outside the parsing core. They read a parsed document only through the
//!     public line contract (type, level, data, meta, prefix, canonical form) and the table
//!     of contents, and turn it into some output text.
//!
//!     Formats:
//!         - debug     one tagged line per node, preceded by the numbered TOC
//!         - html      HTML contents, optionally a full page with a TOC
//!         - gemtext   canonical re-serialization of the document
//!         - json      serde_json dump of title, TOC and lines
//!         - yaml      serde_yaml dump of the same
//!
//!     All of them implement [Format] and are looked up by name through a [FormatRegistry].

pub mod debug;
pub mod gemtext;
pub mod html;
pub mod registry;
pub mod serialized;

pub use debug::DebugFormat;
pub use gemtext::GemtextFormat;
pub use html::HtmlFormat;
pub use registry::FormatRegistry;
pub use serialized::{JsonFormat, YamlFormat};

use crate::gemtext::ast::Line;
use crate::gemtext::parsing::Parser;
use crate::gemtext::toc::{title_of, TocEntry};
use thiserror::Error;

/// Errors raised while selecting or running a format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Read-only view of a parsed document handed to formats.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    pub lines: &'a [Line],
    pub toc: &'a [TocEntry],
    pub title: &'a str,
}

impl<'a> DocumentView<'a> {
    /// Builds a view over `parser`, computing the TOC through its (non-forced) cache.
    pub fn from_parser(parser: &'a mut Parser) -> Self {
        let (lines, toc) = parser.contents();
        Self {
            lines,
            toc,
            title: title_of(toc),
        }
    }
}

/// Trait for output formats
///
/// Implementors turn a parsed document into text.
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError> {
///         Ok(format!("{}\n", doc.lines.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "debug")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render the document
    fn serialize(&self, doc: &DocumentView<'_>) -> Result<String, FormatError>;
}
