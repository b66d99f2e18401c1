//! # Inline Parsing
//!
//! Ordered pattern application over the raw text of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates over the text
//! of inline-eligible blocks (paragraphs, headings, quotes, list items).
//!
//! The resolver keeps an ordered sequence of literal runs and claimed spans.
//! Each category in priority order splits the remaining literal runs:
//! - Bold, then italic, strikethrough and inline code scan literal runs only
//! - Links scan a masked view where claimed spans are opaque placeholders,
//!   so a label can hold spans from the earlier categories
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Styled, Link) and `InlineKind`
//! - **`kinds`**: Inline-specific types with owned patterns (Bold, Italic, CodeSpan, Link, ...)
//! - **`masked`**: `MaskedView` mapping placeholder offsets back to the source
//! - **`resolver`**: `resolve()` main entry point
//!
//! ## Priority
//!
//! `**bold**` is claimed by bold before italic can see it, so it is never
//! read as two italics.

pub mod kinds;
pub mod masked;
pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{InlineKind, InlineNode};
