use serde::Serialize;

use crate::span::Span;

/// Inline span categories in application priority order.
///
/// The order is load-bearing: bold runs before italic so `**x**` is never
/// read as two italics, and link runs last so its label can contain spans
/// claimed by every other category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InlineKind {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Link,
}

impl InlineKind {
    pub const PRIORITY: [InlineKind; 5] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Strikethrough,
        InlineKind::InlineCode,
        InlineKind::Link,
    ];

    /// Category name as used by themes.
    pub fn name(self) -> &'static str {
        match self {
            InlineKind::Bold => "bold",
            InlineKind::Italic => "italic",
            InlineKind::Strikethrough => "strikethrough",
            InlineKind::InlineCode => "inlineCode",
            InlineKind::Link => "link",
        }
    }
}

/// A parsed inline node with byte spans into the resolved text.
///
/// A resolved sequence covers its text exactly: node spans are contiguous,
/// start at 0 and end at the text length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// A literal run that no category claimed.
    Text(Span),
    /// Bold, italic, strikethrough or inline code.
    Styled {
        kind: InlineKind,
        /// Full span including delimiters.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
    /// `[label](destination)`.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        label: Span,
        /// Taken verbatim; never validated or escaped.
        destination: Span,
        /// The label's own literal runs and spans, covering `label` exactly.
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Styled { full, .. } | InlineNode::Link { full, .. } => *full,
        }
    }

    /// The node's category, `None` for literal runs.
    pub fn kind(&self) -> Option<InlineKind> {
        match self {
            InlineNode::Text(_) => None,
            InlineNode::Styled { kind, .. } => Some(*kind),
            InlineNode::Link { .. } => Some(InlineKind::Link),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineNode::Text(_))
    }
}
