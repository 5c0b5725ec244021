//! Parser driver
//!
//! Owns the parsed line sequence, the preformat state carried between lines and the cached
//! table of contents. The cache is never invalidated implicitly: after changing the lines
//! through [Parser::lines_mut], callers pass `force = true` to
//! [Parser::table_of_contents] to see the change.

use super::error::ParseError;
use crate::gemtext::ast::Line;
use crate::gemtext::lexing::{LineClassifier, PreformatState};
use crate::gemtext::toc::{build_table_of_contents, title_of, TocEntry};
use std::io::BufRead;

/// Parser state for one gemtext document.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    lines: Vec<Line>,
    classifier: LineClassifier,
    toc: Option<Vec<TocEntry>>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `reader` to the end, appending one node per line.
    ///
    /// Line terminators (`\n`, `\r\n`) are stripped before classification and a final line
    /// without a terminator still counts. Bytes that are not UTF-8 are decoded lossily.
    /// On a read error parsing stops; lines read so far stay in the parser.
    pub fn parse<R: BufRead>(&mut self, mut reader: R) -> Result<(), ParseError> {
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            line_number += 1;
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ParseError::Read {
                    line: line_number,
                    source,
                })?;
            if read == 0 {
                return Ok(());
            }
            let raw = String::from_utf8_lossy(&buf);
            self.push_raw(strip_terminator(&raw));
        }
    }

    /// Parses an in-memory document with the same line splitting as [Parser::parse].
    pub fn parse_str(&mut self, source: &str) {
        for raw in source.split_inclusive('\n') {
            self.push_raw(strip_terminator(raw));
        }
    }

    fn push_raw(&mut self, raw: &str) {
        let line = self.classifier.classify(raw);
        self.lines.push(line);
    }

    /// The parsed lines, in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Mutable access to the parsed lines. Does not invalidate the cached TOC.
    pub fn lines_mut(&mut self) -> &mut Vec<Line> {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Preformat state after the last parsed line.
    pub fn preformat_state(&self) -> PreformatState {
        self.classifier.state()
    }

    /// The numbered table of contents.
    ///
    /// Returns the cached TOC unless there is none yet or `force` is set, in which case it
    /// is rebuilt from the current lines and replaces the cache.
    pub fn table_of_contents(&mut self, force: bool) -> &[TocEntry] {
        if force || self.toc.is_none() {
            self.toc = Some(build_table_of_contents(&self.lines));
        }
        self.toc.as_deref().unwrap_or(&[])
    }

    /// The lines together with the (non-forced) cached TOC.
    pub fn contents(&mut self) -> (&[Line], &[TocEntry]) {
        if self.toc.is_none() {
            self.toc = Some(build_table_of_contents(&self.lines));
        }
        (self.lines.as_slice(), self.toc.as_deref().unwrap_or(&[]))
    }

    /// The text of the first level 1 heading, or "" when there is none.
    ///
    /// Uses the cached TOC without forcing a rebuild.
    pub fn title(&mut self) -> &str {
        title_of(self.table_of_contents(false))
    }
}

fn strip_terminator(raw: &str) -> &str {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    raw.strip_suffix('\r').unwrap_or(raw)
}

/// Parse an in-memory document.
pub fn parse_document(source: &str) -> Parser {
    let mut parser = Parser::new();
    parser.parse_str(source);
    parser
}

/// Parse a whole stream into a fresh parser.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser.parse(reader)?;
    Ok(parser)
}
