//! # Lexical Highlighting
//!
//! Line-at-a-time regex classification of fenced code.
//!
//! A keyword scan for the line's [`LanguageFamily`] plus a fixed list of
//! structural scans (comments, strings, numbers, calls, tags, class names,
//! operators) produce candidate spans. Overlaps are settled by a single
//! sort-then-sweep: earliest start wins, then longest. There is no
//! cross-line state, so a block comment spanning lines is only recognised on
//! its first line.

pub mod classify;
pub mod language;
pub mod patterns;
pub mod types;

pub use classify::{classify, classify_code, classify_family};
pub use language::LanguageFamily;
pub use types::{TokenCategory, TokenSpan};
