use std::ops::Range;

use crate::span::Span;

use super::types::InlineNode;

/// The text of an inline sequence with every claimed span collapsed to a
/// single placeholder character.
///
/// Lets a pattern match across spans produced by earlier categories (a link
/// label containing bold text) without seeing their delimiters or content.
/// Offsets found in the masked text map back to the source text.
pub struct MaskedView {
    text: String,
    /// Source offset of each masked byte, plus one entry for the end.
    offsets: Vec<usize>,
}

impl MaskedView {
    pub const PLACEHOLDER: char = '\u{FFFC}';

    pub fn new(source: &str, nodes: &[InlineNode]) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);

        for node in nodes {
            match node {
                InlineNode::Text(sp) => {
                    text.push_str(sp.slice(source));
                    offsets.extend(sp.start..sp.end);
                }
                other => {
                    text.push(Self::PLACEHOLDER);
                    offsets.extend(std::iter::repeat_n(
                        other.span().start,
                        Self::PLACEHOLDER.len_utf8(),
                    ));
                }
            }
        }
        offsets.push(nodes.last().map_or(0, |n| n.span().end));

        Self { text, offsets }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maps a byte range of the masked text back to the source.
    ///
    /// A range that starts on a placeholder starts at its span; a range that
    /// ends right after one ends at its span's end.
    pub fn to_source(&self, masked: Range<usize>) -> Span {
        Span::new(self.offsets[masked.start], self.offsets[masked.end])
    }
}
