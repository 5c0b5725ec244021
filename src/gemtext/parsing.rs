//! Document parsing
//!
//!     The parser drives the line classifier over an input stream, in order, and keeps the
//!     resulting nodes. Content never makes parsing fail; only a failing read does.
//!
//!     Entry points:
//!         - [Parser::parse] for any `BufRead`, appending to an existing parser
//!         - [parse_reader] and [parse_document] to get a fresh parser in one call

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{parse_document, parse_reader, Parser};
