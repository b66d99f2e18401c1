use serde::Serialize;

use crate::span::Span;

/// Token categories emitted by the highlighter. Colors are the renderer's
/// business; themes key on [`TokenCategory::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Keyword,
    String,
    Number,
    Comment,
    FunctionCall,
    Operator,
    ClassName,
    Tag,
}

impl TokenCategory {
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::String => "string",
            TokenCategory::Number => "number",
            TokenCategory::Comment => "comment",
            TokenCategory::FunctionCall => "functionCall",
            TokenCategory::Operator => "operator",
            TokenCategory::ClassName => "className",
            TokenCategory::Tag => "tag",
        }
    }
}

/// A classified run of one code line, or an unclassified gap between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub span: Span,
    /// `None` for literal runs no pattern claimed.
    pub category: Option<TokenCategory>,
}

impl TokenSpan {
    pub fn text(self, line: &str) -> &str {
        self.span.slice(line)
    }
}
