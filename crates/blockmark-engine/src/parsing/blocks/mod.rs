//! # Block Parsing
//!
//! Dialect-independent machinery for the two-pass parse.
//!
//! ## Parsing Phases
//!
//! 1. **Region extraction** (`regions`): the grammar's region openers are tried
//!    on every line; matched regions become finished blocks, everything else is
//!    collected into runs of plain text lines.
//!
//! 2. **Line classification + accumulation** (`classify`, `builder`): each plain
//!    line is classified into a `LineClass` and pushed into a `BlockBuilder`
//!    that groups consecutive list/quote/paragraph lines into one block.
//!
//! ## Modules
//!
//! - **`kinds`**: syntax knowledge per block kind (fences, headings, lists,
//!   quotes, media references, inline formulas, directives)
//! - **`classify`**: `LineClass`, the result of classifying one line
//! - **`regions`**: `Region` and the pass-1 splitter
//! - **`builder`**: `BlockBuilder` accumulation state machine
//!
//! ## Key Invariants
//!
//! - Region bodies are raw zones: no line rule ever sees them
//! - A blank line always ends the open accumulation
//! - A line of a different kind than the open accumulation starts a new block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod regions;

pub use builder::BlockBuilder;
pub use classify::{LineClass, ListKind};
pub use regions::{Region, extract_regions};
