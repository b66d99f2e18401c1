//! Document-level tests for the parsing module.
//!
//! Kind-specific recognisers are tested next to their kinds; these cover how
//! the builder groups lines and how blocks feed the inline resolver.

use pretty_assertions::assert_eq;

use crate::{
    parsing::{
        ParseOptions,
        blocks::{BlockKind, BlockNode},
        inline::{InlineKind, InlineNode},
        parse_document, parse_document_with, parse_inline_for_block,
    },
    snapshot::normalize,
    span::Span,
};

fn kinds(text: &str) -> Vec<BlockKind> {
    parse_document(text).into_iter().map(|b| b.kind).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn fence_info_string() {
    let doc = parse_document("```typescript example.ts\nconst x = 1;\n```");
    assert_eq!(
        doc.blocks(),
        &[BlockNode {
            kind: BlockKind::CodeBlock {
                language: Some("typescript".into()),
                filename: Some("example.ts".into()),
                code: "const x = 1;".into(),
            },
            span: Span::new(0, 41),
        }]
    );
}

#[test]
fn fence_content_is_verbatim() {
    assert_eq!(
        kinds("```\n# not a heading\n- not a list\n```"),
        vec![BlockKind::CodeBlock {
            language: None,
            filename: None,
            code: "# not a heading\n- not a list".into(),
        }]
    );
}

#[test]
fn heading_level() {
    assert_eq!(
        kinds("### Title"),
        vec![BlockKind::Heading {
            level: 3,
            text: "Title".into(),
        }]
    );
}

#[test]
fn list_marker_switch_starts_new_list() {
    let doc = parse_document("- a\n- b\n- c\n1. d");
    assert_eq!(doc.len(), 2);
    assert_eq!(
        doc.blocks()[0].kind,
        BlockKind::List {
            ordered: false,
            items: strings(&["a", "b", "c"]),
        }
    );
    assert_eq!(doc.blocks()[0].span, Span::new(0, 11));
    assert_eq!(
        doc.blocks()[1].kind,
        BlockKind::List {
            ordered: true,
            items: strings(&["d"]),
        }
    );
}

#[test]
fn spaced_dashes_are_a_list_item_not_a_rule() {
    assert_eq!(
        kinds("- - -\n---"),
        vec![
            BlockKind::List {
                ordered: false,
                items: strings(&["- -"]),
            },
            BlockKind::ThematicBreak,
        ]
    );
}

#[test]
fn header_only_table_is_dropped() {
    assert!(parse_document("| A | B |\n| - | - |").is_empty());
}

#[test]
fn header_only_table_is_kept_as_paragraph_when_strict() {
    let options = ParseOptions {
        strict_tables: true,
        ..ParseOptions::default()
    };
    let doc = parse_document_with("| A | B |\n| - | - |", options);
    assert_eq!(
        doc.blocks(),
        &[BlockNode {
            kind: BlockKind::Paragraph {
                text: "| A | B |\n| - | - |".into(),
            },
            span: Span::new(0, 19),
        }]
    );
}

#[test]
fn table_rows_drop_delimiter_and_outer_pipes() {
    let doc = parse_document("| A | B |\n|---|:-:|\n| 1 | 2 |");
    assert_eq!(
        doc.blocks(),
        &[BlockNode {
            kind: BlockKind::Table {
                rows: vec![strings(&["A", "B"]), strings(&["1", "2"])],
            },
            span: Span::new(0, 29),
        }]
    );
}

#[test]
fn colon_only_delimiter_row_opens_a_table() {
    assert_eq!(
        kinds("| a | b |\n|:|:|\n| c | d |"),
        vec![BlockKind::Table {
            rows: vec![strings(&["a", "b"]), strings(&["c", "d"])],
        }]
    );
}

#[test]
fn blank_pipe_rows_are_dropped_like_delimiters() {
    let doc = parse_document("| a | b |\n|---|---|\n| c | d |\n| | |");
    assert_eq!(
        doc.blocks(),
        &[BlockNode {
            kind: BlockKind::Table {
                rows: vec![strings(&["a", "b"]), strings(&["c", "d"])],
            },
            span: Span::new(0, 35),
        }]
    );
}

#[test]
fn pipe_line_without_delimiter_row_is_a_paragraph() {
    assert_eq!(
        kinds("a | b\nc | d"),
        vec![BlockKind::Paragraph {
            text: "a | b\nc | d".into(),
        }]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let doc = parse_document("```py\nx = 1\n");
    assert_eq!(
        doc.blocks(),
        &[BlockNode {
            kind: BlockKind::CodeBlock {
                language: Some("py".into()),
                filename: None,
                code: "x = 1".into(),
            },
            span: Span::new(0, 11),
        }]
    );
}

#[test]
fn unterminated_fence_is_a_paragraph_when_strict() {
    let doc = parse_document_with("```py\nx = 1\n", ParseOptions::strict());
    assert_eq!(
        doc.blocks()[0].kind,
        BlockKind::Paragraph {
            text: "```py\nx = 1".into(),
        }
    );
}

#[test]
fn quote_keeps_inner_blanks_and_trims_trailing() {
    let doc = parse_document("> a\n>\n> b\n\n\nnext");
    assert_eq!(
        doc.blocks(),
        &[
            BlockNode {
                kind: BlockKind::BlockQuote {
                    text: "a\n\nb".into(),
                },
                span: Span::new(0, 9),
            },
            BlockNode {
                kind: BlockKind::Paragraph {
                    text: "next".into(),
                },
                span: Span::new(12, 16),
            },
        ]
    );
}

#[test]
fn paragraph_stops_at_higher_priority_line() {
    assert_eq!(
        kinds("line one\nline two\n# H\nintro\n- item"),
        vec![
            BlockKind::Paragraph {
                text: "line one\nline two".into(),
            },
            BlockKind::Heading {
                level: 1,
                text: "H".into(),
            },
            BlockKind::Paragraph {
                text: "intro".into(),
            },
            BlockKind::List {
                ordered: false,
                items: strings(&["item"]),
            },
        ]
    );
}

#[test]
fn indented_or_tabbed_markers_continue_a_paragraph() {
    assert_eq!(
        kinds("intro\n  - x\n-\ty\n#\tz"),
        vec![BlockKind::Paragraph {
            text: "intro\n  - x\n-\ty\n#\tz".into(),
        }]
    );
}

#[test]
fn paragraph_stops_before_table() {
    assert_eq!(
        kinds("intro\n| A | B |\n| - | - |\n| 1 | 2 |"),
        vec![
            BlockKind::Paragraph {
                text: "intro".into(),
            },
            BlockKind::Table {
                rows: vec![strings(&["A", "B"]), strings(&["1", "2"])],
            },
        ]
    );
}

#[test]
fn crlf_line_endings() {
    let doc = parse_document("# A\r\n\r\ntext\r\n");
    let spans: Vec<Span> = doc.iter().map(|b| b.span).collect();
    assert_eq!(spans, vec![Span::new(0, 3), Span::new(7, 11)]);
    assert_eq!(doc.blocks()[1].raw_text(), Some("text"));
}

#[test]
fn parsing_twice_is_identical() {
    let text = "# T\n\n- a\n- b\n\n```\ncode\n```\n\n> q\n\n| x | y |\n|---|---|\n| 1 | 2 |";
    assert_eq!(parse_document(text), parse_document(text));
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n  \n\t\n").is_empty());
}

#[test]
fn list_items_resolve_separately() {
    let doc = parse_document("- **a**\n- [b](c)");
    let inline = parse_inline_for_block(&doc.blocks()[0]);
    assert_eq!(inline.len(), 2);
    assert_eq!(inline[0][0].kind(), Some(InlineKind::Bold));
    assert!(matches!(inline[1][0], InlineNode::Link { .. }));
}

#[test]
fn code_and_tables_have_no_inline() {
    let doc = parse_document("```\n**x**\n```\n\n| a | b |\n|---|---|\n| **c** | d |");
    for block in &doc {
        assert!(parse_inline_for_block(block).is_empty());
    }
}

#[test]
fn mixed_document_outline() {
    let text = concat!(
        "## Notes\n",
        "\n",
        "Some **bold** text.\n",
        "\n",
        "> quoted `code`\n",
        "\n",
        "---\n",
        "\n",
        "```rust\n",
        "fn main() {}\n",
        "```\n",
    );
    let outline = normalize(parse_document(text).blocks()).to_string();
    insta::assert_snapshot!(outline, @r#"
    heading[0..8] level=2 "Notes"
      text "Notes"
    paragraph[10..29] "Some **bold** text."
      text "Some "
      bold "**bold**"
      text " text."
    blockquote[31..46] "quoted `code`"
      text "quoted "
      inlineCode "`code`"
    hr[48..51]
    codeBlock[53..77] lang=rust file=- "fn main() {}"
    "#);
}
