//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. Recognisers work on
//! a single line; lookahead and grouping belong to the builder.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceInfo};
pub use heading::{Heading, HeadingLine};
pub use list::{List, ListItemLine};
pub use table::Table;
pub use thematic_break::ThematicBreak;
