//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Bold`**, **`Italic`**, **`Strikethrough`**: doubled/single `*`, `_` and `~~`
//! - **`CodeSpan`**: backtick-delimited, content verbatim
//! - **`Link`**: `[label](destination)`
//!
//! ## Design Principle
//!
//! All delimiter patterns live here, not scattered in resolver code.
//! Patterns are compiled once and shared.

pub mod code_span;
pub mod emphasis;
pub mod link;

use regex::Regex;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic, Strikethrough};
pub use link::Link;

use super::types::InlineKind;

impl InlineKind {
    /// The compiled pattern for this category.
    pub fn pattern(self) -> &'static Regex {
        match self {
            InlineKind::Bold => Bold::pattern(),
            InlineKind::Italic => Italic::pattern(),
            InlineKind::Strikethrough => Strikethrough::pattern(),
            InlineKind::InlineCode => CodeSpan::pattern(),
            InlineKind::Link => Link::pattern(),
        }
    }
}
