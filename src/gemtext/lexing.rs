//! Line classification
//!
//!     Gemtext needs no tokenizer: the kind of a line is decided by its first (up to) three
//!     characters, and the only context that matters is whether the previous toggle opened a
//!     preformatted block. This module holds that decision as a pure function plus a small
//!     stateful wrapper that threads the preformat state from line to line.

pub mod line_classification;

pub use line_classification::{classify_line, LineClassifier, PreformatState};
