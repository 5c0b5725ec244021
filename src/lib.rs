//! # gmi
//!
//! A parser for text/gemini, the line-oriented markup format of the Gemini protocol.
//!
//! File Layout
//!
//! Every line of a gemtext document classifies on its own; the only state carried from
//! one line to the next is whether the parser is inside a preformatted block. The crate
//! follows that shape:
//!
//! src/gemtext
//!   ├── ast        The line node model (Line, LineType)
//!   ├── lexing     Per-line classification and the preformat toggle state
//!   ├── parsing    The driver that reads a stream and accumulates lines
//!   ├── toc        Numbered table of contents derived from heading lines
//!   ├── formats    Renderers that consume the public line contract (html, debug, ...)
//!   ├── config     Layered configuration for the renderers and the CLI
//!   └── testing    Fluent assertions used by the test suites
//!
//! The core (ast, lexing, parsing, toc) does no I/O beyond reading the input stream and
//! never logs. Everything under formats is a consumer of the core's public contract.

pub mod gemtext;
