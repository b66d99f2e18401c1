use serde::Serialize;

use crate::span::Span;

/// The kind of a block together with its kind-specific content.
///
/// Text-bearing kinds carry raw inline text; inline spans are resolved
/// separately by [`crate::parsing::inline::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockKind {
    /// `#`..`######` heading.
    Heading {
        /// Heading depth, 1-6.
        level: u8,
        text: String,
    },
    /// Fallback block: consecutive non-blank lines joined with `\n`.
    Paragraph { text: String },
    /// A fenced code block. `code` excludes the fence lines.
    CodeBlock {
        language: Option<String>,
        filename: Option<String>,
        code: String,
    },
    /// Consecutive `>` lines with one prefix stripped per line.
    #[serde(rename = "blockquote")]
    BlockQuote { text: String },
    /// A flat list. Numbering is left to the renderer.
    List { ordered: bool, items: Vec<String> },
    /// Horizontal rule.
    #[serde(rename = "hr")]
    ThematicBreak,
    /// Pipe table; `rows[0]` is the header row.
    Table { rows: Vec<Vec<String>> },
}

/// A parsed block node with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    #[serde(flatten)]
    pub kind: BlockKind,
    /// Byte span covering every source line consumed for this block.
    pub span: Span,
}

impl BlockNode {
    /// Raw inline text of headings, paragraphs and quotes; code of code blocks.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Heading { text, .. }
            | BlockKind::Paragraph { text }
            | BlockKind::BlockQuote { text } => Some(text),
            BlockKind::CodeBlock { code, .. } => Some(code),
            BlockKind::List { .. } | BlockKind::ThematicBreak | BlockKind::Table { .. } => None,
        }
    }

    /// Short kind label used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::CodeBlock { .. } => "codeBlock",
            BlockKind::BlockQuote { .. } => "blockquote",
            BlockKind::List { .. } => "list",
            BlockKind::ThematicBreak => "hr",
            BlockKind::Table { .. } => "table",
        }
    }
}
