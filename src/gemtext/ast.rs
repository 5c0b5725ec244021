//! Document node model
//!
//!     A gemtext document is a flat, ordered sequence of lines. There is no nesting: each
//!     line is exactly one node, and a node is one of a small closed set of kinds.
//!
//! Line Kinds
//!
//!     These are the line nodes:
//!
//!         - Text: any line that matches no other rule (an empty Text is a paragraph break)
//!         - Link: `=>` target and an optional display name
//!         - PreformatToggle: a line starting with three backticks, opening or closing a block
//!         - Preformat: a line inside a preformatted block, kept verbatim
//!         - Heading: one to three `#`, the level is capped at 3
//!         - UnorderedListItem: `*` followed by a space
//!         - Quote: `>`
//!
//!     Consumers only interact with nodes through the accessors on [Line]: core type, true
//!     type, level, data, meta, prefix and the canonical string form (its `Display` impl).
//!     See [classify_line](crate::gemtext::lexing::classify_line) for how raw lines map to
//!     nodes.

mod line;
mod line_type;

pub use line::Line;
pub use line_type::LineType;

/// Deepest heading level the format recognizes. Also the depth of a TOC section number.
pub const MAX_HEADING_LEVEL: usize = 3;
