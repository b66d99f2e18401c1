pub mod blocks;
pub mod inline;
pub mod lines;
pub mod options;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use lines::lines_with_spans;

pub use options::ParseOptions;

/// The blocks of one document, in source order.
///
/// Built fresh by every parse call; read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn blocks(&self) -> &[BlockNode] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockNode> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParsedDoc {
    type Item = &'a BlockNode;
    type IntoIter = std::slice::Iter<'a, BlockNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for ParsedDoc {
    type Item = BlockNode;
    type IntoIter = std::vec::IntoIter<BlockNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

/// Parses a document with the default (lossy) fallbacks.
pub fn parse_document(text: &str) -> ParsedDoc {
    parse_document_with(text, ParseOptions::default())
}

pub fn parse_document_with(text: &str, options: ParseOptions) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let lines = lines_with_spans(text)
        .map(|lr| classifier.classify(&lr))
        .collect();

    let blocks = BlockBuilder::new(lines, options).finish();
    log::trace!("parsed {} bytes into {} blocks", text.len(), blocks.len());

    #[cfg(debug_assertions)]
    crate::snapshot::invariants::check_blocks(text, &blocks);

    ParsedDoc { blocks }
}

/// Inline parse for every text unit of a block.
///
/// Headings, paragraphs and quotes yield one sequence; lists yield one per
/// item. Code blocks, rules and tables yield nothing.
pub fn parse_inline_for_block(b: &BlockNode) -> Vec<Vec<inline::InlineNode>> {
    match &b.kind {
        BlockKind::Heading { text, .. }
        | BlockKind::Paragraph { text }
        | BlockKind::BlockQuote { text } => vec![inline::resolve(text)],
        BlockKind::List { items, .. } => items.iter().map(|item| inline::resolve(item)).collect(),
        BlockKind::CodeBlock { .. } | BlockKind::ThematicBreak | BlockKind::Table { .. } => {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests;
