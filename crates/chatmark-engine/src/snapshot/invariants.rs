use crate::{
    highlight::TokenSpan,
    parsing::{blocks::BlockNode, inline::InlineNode},
    span::Span,
};

/// Block spans lie inside the document, on char boundaries, in source order
/// and without overlap.
pub fn check_blocks(text: &str, blocks: &[BlockNode]) {
    let mut prev_end = 0;
    for b in blocks {
        assert_in_bounds(text, b.span, "block");
        assert!(
            b.span.start >= prev_end,
            "block {} at {:?} overlaps or precedes the previous block ending at {prev_end}",
            b.kind_name(),
            b.span
        );
        prev_end = b.span.end;
    }
}

/// An inline sequence covers `text` exactly and every sub-span stays inside
/// its node.
pub fn check_inline(text: &str, nodes: &[InlineNode]) {
    check_cover(text, Span::new(0, text.len()), nodes);
}

/// Token runs cover `line` exactly, none empty, and no two unclassified runs
/// are adjacent.
pub fn check_tokens(line: &str, tokens: &[TokenSpan]) {
    let mut cursor = 0;
    let mut prev_plain = false;
    for t in tokens {
        assert_in_bounds(line, t.span, "token");
        assert!(!t.span.is_empty(), "empty token at {:?}", t.span);
        assert_eq!(t.span.start, cursor, "token gap or overlap at {:?}", t.span);
        let plain = t.category.is_none();
        assert!(!(plain && prev_plain), "adjacent plain runs at {:?}", t.span);
        prev_plain = plain;
        cursor = t.span.end;
    }
    assert_eq!(cursor, line.len(), "tokens end at {cursor}, line is {}", line.len());
}

fn check_cover(text: &str, range: Span, nodes: &[InlineNode]) {
    let mut cursor = range.start;
    for n in nodes {
        let full = n.span();
        assert_in_bounds(text, full, "inline");
        assert_eq!(full.start, cursor, "inline gap or overlap at {full:?}");
        match n {
            InlineNode::Text(sp) => assert!(!sp.is_empty(), "empty text run at {sp:?}"),
            InlineNode::Styled { inner, .. } => {
                assert!(full.contains(*inner), "inner {inner:?} outside {full:?}");
            }
            InlineNode::Link {
                label,
                destination,
                children,
                ..
            } => {
                assert!(full.contains(*label), "label {label:?} outside {full:?}");
                assert!(
                    full.contains(*destination),
                    "destination {destination:?} outside {full:?}"
                );
                check_cover(text, *label, children);
            }
        }
        cursor = full.end;
    }
    assert_eq!(cursor, range.end, "inline nodes end at {cursor}, expected {}", range.end);
}

fn assert_in_bounds(text: &str, sp: Span, what: &str) {
    assert!(
        sp.start <= sp.end && sp.end <= text.len(),
        "{what} span out of bounds: {sp:?} (text len: {})",
        text.len()
    );
    assert!(
        text.is_char_boundary(sp.start) && text.is_char_boundary(sp.end),
        "{what} span splits a character: {sp:?}"
    );
}
