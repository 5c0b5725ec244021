//! Main module for gemtext library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod toc;

pub use ast::{Line, LineType};
pub use lexing::{classify_line, LineClassifier, PreformatState};
pub use parsing::{parse_document, parse_reader, ParseError, Parser};
pub use toc::{SectionNumber, TocEntry};
