use crate::{parsing::lines::LineRef, span::Span};

use super::kinds::{
    BlockQuote, CodeFence, FenceInfo, Heading, HeadingLine, List, ListItemLine, Table,
    ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Several facts can hold at once
/// (`---` is both a rule and a table separator); the opener dispatch decides
/// which one wins.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Byte span of this line in the document, without its terminator.
    pub line: Span,
    /// The line text without its terminator.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Info string if the line starts with a backtick fence.
    pub fence: Option<FenceInfo<'a>>,
    /// Heading level and text if the line is an ATX heading.
    pub heading: Option<HeadingLine<'a>>,
    /// Whether the line is a horizontal rule.
    pub is_rule: bool,
    /// Quoted text if the line starts with `>`.
    pub quote: Option<&'a str>,
    /// Marker kind and item text if the line is a list item.
    pub list_item: Option<ListItemLine<'a>>,
    /// Whether the line contains a `|`.
    pub has_pipe: bool,
    /// Whether the line is a table delimiter row.
    pub is_table_separator: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        LineClass {
            line: lr.span,
            text,
            is_blank: text.trim().is_empty(),
            fence: CodeFence::sig(text),
            heading: Heading::parse(text),
            is_rule: ThematicBreak::matches(text),
            quote: BlockQuote::strip_prefix(text),
            list_item: List::parse(text),
            has_pipe: Table::has_pipe(text),
            is_table_separator: Table::is_separator(text),
        }
    }
}
