//! Error types for parsing

use thiserror::Error;

/// The only way parsing can fail: the underlying stream could not be read.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the input failed while reading `line` (1-based)
    #[error("failed to read line {line} of the input: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// 1-based number of the line that was being read.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Read { line, .. } => *line,
        }
    }
}
