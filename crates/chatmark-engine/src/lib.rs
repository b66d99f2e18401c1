//! Markup engines for chat message rendering: a markdown block tokenizer, an
//! inline span resolver and a line-based code highlighter.
//!
//! All three are pure functions over `&str` producing spans into their input.
//! Styling and layout belong to the caller.

pub mod highlight;
pub mod parsing;
pub mod snapshot;
pub mod span;

pub use highlight::{LanguageFamily, TokenCategory, TokenSpan, classify, classify_code};
pub use parsing::{
    ParseOptions, ParsedDoc,
    blocks::{BlockKind, BlockNode},
    inline::{InlineKind, InlineNode, resolve},
    parse_document, parse_document_with, parse_inline_for_block,
};
pub use span::Span;
