use regex::Captures;

use crate::span::Span;

use super::{
    kinds::Link,
    masked::MaskedView,
    types::{InlineKind, InlineNode},
};

/// Resolves the inline spans of one block's text.
///
/// Starts from a single literal run and applies each category in
/// [`InlineKind::PRIORITY`] order. A category only scans the literal runs left
/// by earlier categories; spans already claimed are never re-scanned. The
/// sequence is rebuilt after each category rather than mutated.
///
/// # Returns
/// Nodes covering `text` exactly, in order, with no gaps or overlaps. Empty
/// input yields no nodes.
pub fn resolve(text: &str) -> Vec<InlineNode> {
    let mut nodes = if text.is_empty() {
        vec![]
    } else {
        vec![InlineNode::Text(Span::new(0, text.len()))]
    };

    for kind in InlineKind::PRIORITY {
        nodes = match kind {
            InlineKind::Link => apply_links(text, nodes),
            _ => apply_delimited(text, nodes, kind),
        };
    }

    #[cfg(debug_assertions)]
    crate::snapshot::invariants::check_inline(text, &nodes);

    nodes
}

/// Splits every literal run around the matches of a delimited category.
fn apply_delimited(text: &str, nodes: Vec<InlineNode>, kind: InlineKind) -> Vec<InlineNode> {
    let re = kind.pattern();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        let InlineNode::Text(run) = node else {
            out.push(node);
            continue;
        };

        let mut cursor = run.start;
        for caps in re.captures_iter(run.slice(text)) {
            let (Some(full), Some(inner)) = (caps.get(0), first_group(&caps)) else {
                continue;
            };
            push_text(&mut out, cursor, run.start + full.start());
            out.push(InlineNode::Styled {
                kind,
                full: Span::from(full.range()).shift(run.start),
                inner: Span::from(inner.range()).shift(run.start),
            });
            cursor = run.start + full.end();
        }
        push_text(&mut out, cursor, run.end);
    }

    out
}

/// Matches links over the masked view so a label may contain earlier spans.
///
/// The brackets, parentheses and destination must lie in literal runs; a
/// candidate whose destination covers a claimed span is skipped.
fn apply_links(text: &str, nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let view = MaskedView::new(text, &nodes);

    let links: Vec<(Span, Span, Span)> = Link::pattern()
        .captures_iter(view.text())
        .filter_map(|caps| {
            let full = view.to_source(caps.get(0)?.range());
            let label = view.to_source(caps.get(1)?.range());
            let destination = view.to_source(caps.get(2)?.range());
            let literal_destination = nodes
                .iter()
                .all(|n| n.is_text() || !n.span().overlaps(destination));
            literal_destination.then_some((full, label, destination))
        })
        .collect();

    if links.is_empty() {
        return nodes;
    }

    let end = nodes.last().map_or(0, |n| n.span().end);
    let mut out = vec![];
    let mut cursor = 0;
    for (full, label, destination) in links {
        out.extend(clip(&nodes, Span::new(cursor, full.start)));
        out.push(InlineNode::Link {
            full,
            label,
            destination,
            children: clip(&nodes, label),
        });
        cursor = full.end;
    }
    out.extend(clip(&nodes, Span::new(cursor, end)));
    out
}

/// The part of `nodes` inside `range`: literal runs are cut to fit, spans are
/// kept whole when inside and dropped when outside.
fn clip(nodes: &[InlineNode], range: Span) -> Vec<InlineNode> {
    nodes
        .iter()
        .filter_map(|n| match n {
            InlineNode::Text(sp) => sp.intersect(range).map(InlineNode::Text),
            other => {
                let sp = other.span();
                debug_assert!(
                    range.contains(sp) || !range.overlaps(sp),
                    "span {sp:?} straddles {range:?}"
                );
                range.contains(sp).then(|| other.clone())
            }
        })
        .collect()
}

/// The first capture group that participated in the match.
fn first_group<'h>(caps: &Captures<'h>) -> Option<regex::Match<'h>> {
    caps.iter().skip(1).flatten().next()
}

fn push_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(Span::new(start, end)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(start: usize, end: usize) -> InlineNode {
        InlineNode::Text(Span::new(start, end))
    }

    fn styled(kind: InlineKind, full: (usize, usize), inner: (usize, usize)) -> InlineNode {
        InlineNode::Styled {
            kind,
            full: Span::new(full.0, full.1),
            inner: Span::new(inner.0, inner.1),
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(resolve("hello world"), vec![text(0, 11)]);
    }

    #[test]
    fn empty_text_has_no_nodes() {
        assert!(resolve("").is_empty());
    }

    #[test]
    fn bold_then_italic_do_not_overlap() {
        let s = "**bold** and *italic*";
        assert_eq!(
            resolve(s),
            vec![
                styled(InlineKind::Bold, (0, 8), (2, 6)),
                text(8, 13),
                styled(InlineKind::Italic, (13, 21), (14, 20)),
            ]
        );
    }

    #[test]
    fn strikethrough_and_code() {
        let s = "~~old~~ `new`";
        assert_eq!(
            resolve(s),
            vec![
                styled(InlineKind::Strikethrough, (0, 7), (2, 5)),
                text(7, 8),
                styled(InlineKind::InlineCode, (8, 13), (9, 12)),
            ]
        );
    }

    #[test]
    fn emphasis_wins_over_code_by_priority() {
        // italic runs before inline code, so it claims the starred text first
        let s = "`a *b* c`";
        let nodes = resolve(s);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1].kind(), Some(InlineKind::Italic));
        assert!(nodes.iter().all(|n| n.kind() != Some(InlineKind::InlineCode)));
    }

    #[test]
    fn plain_link() {
        let s = "see [docs](https://example.com)";
        assert_eq!(
            resolve(s),
            vec![
                text(0, 4),
                InlineNode::Link {
                    full: Span::new(4, 31),
                    label: Span::new(5, 9),
                    destination: Span::new(11, 30),
                    children: vec![text(5, 9)],
                },
            ]
        );
    }

    #[test]
    fn bold_inside_link_label_is_nested() {
        let s = "[**b** x](u)";
        assert_eq!(
            resolve(s),
            vec![InlineNode::Link {
                full: Span::new(0, 12),
                label: Span::new(1, 8),
                destination: Span::new(10, 11),
                children: vec![styled(InlineKind::Bold, (1, 6), (3, 4)), text(6, 8)],
            }]
        );
    }

    #[test]
    fn code_span_hides_bracket_from_link() {
        let s = "[`a]`](u)";
        let nodes = resolve(s);
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            InlineNode::Link { children, .. } => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].kind(), Some(InlineKind::InlineCode));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn destination_covering_a_span_is_not_a_link() {
        let s = "[a](`u`)";
        let nodes = resolve(s);
        assert!(nodes.iter().all(|n| n.kind() != Some(InlineKind::Link)));
    }

    #[test]
    fn unclosed_constructs_become_text() {
        assert_eq!(resolve("**open and `tick"), vec![text(0, 16)]);
    }

    #[test]
    fn mismatched_link_brackets_are_text() {
        assert_eq!(resolve("[label(url)"), vec![text(0, 11)]);
    }

    #[test]
    fn multibyte_offsets_are_char_aligned() {
        let s = "é **ü** ñ";
        let nodes = resolve(s);
        assert_eq!(nodes[1].kind(), Some(InlineKind::Bold));
        assert_eq!(nodes[1].span().slice(s), "**ü**");
    }
}
