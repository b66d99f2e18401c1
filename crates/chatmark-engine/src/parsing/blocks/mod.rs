//! # Block Parsing
//!
//! Two-phase block parsing over the lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence info, heading, rule, quote,
//!    list marker, table pipes)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` walks the classified
//!    lines with a cursor and emits `BlockNode`s as blocks are consumed
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, List, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` priority dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` cursor loop for block construction
//!
//! ## Key Invariants
//!
//! - Blocks are flat and in source order; nothing is nested
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A paragraph ends at a blank line or at any line that opens another block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
