use chatmark_engine::{
    InlineNode, ParseOptions, classify, parse_document, parse_document_with,
    parse_inline_for_block, resolve, snapshot,
};

fn fixture_outline(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse_document(&md);
    snapshot::invariants::check_blocks(&md, doc.blocks());
    snapshot::normalize(doc.blocks()).to_string()
}

#[test]
fn fixture_chat_reply() {
    insta::assert_snapshot!(fixture_outline("chat_reply"), @r#"
    heading[0..15] level=1 "Release notes"
      text "Release notes"
    paragraph[17..75] "We shipped **three** fixes and one ~~regression~~ feature."
      text "We shipped "
      bold "**three**"
      text " fixes and one "
      strikethrough "~~regression~~"
      text " feature."
    list[77..146] ordered=true items=2
      item 0
        text "Faster "
        inlineCode "`parse`"
        text " calls"
      item 1
        text "See "
        link "[the guide](https://example.com/guide)"
          text "the guide"
    table[148..220] rows=3
      row ["Area", "Status"]
      row ["Parser", "done"]
      row ["Themes", "_wip_"]
    "#);
}

#[test]
fn fixture_code_answer() {
    insta::assert_snapshot!(fixture_outline("code_answer"), @r#"
    paragraph[0..16] "Here is the fix:"
      text "Here is the fix:"
    codeBlock[18..75] lang=rust file=src/main.rs "fn main() {\n    println!(\"hi\");\n}"
    blockquote[77..100] "Tip: run `cargo test`"
      text "Tip: run "
      inlineCode "`cargo test`"
    "#);
}

/// Slicing every block span reproduces the lines it was built from.
#[test]
fn block_spans_slice_source_lines() {
    let md = "# Title\n\npara one\npara two\n\n- x\n- y";
    let doc = parse_document(md);
    let slices: Vec<&str> = doc.iter().map(|b| b.span.slice(md)).collect();
    assert_eq!(slices, vec!["# Title", "para one\npara two", "- x\n- y"]);
}

/// Rendering pipeline as a caller drives it: blocks, then inline per block,
/// then highlighting per code line.
#[test]
fn renderer_walk() {
    let md = "Use `x`:\n\n```go\nfunc main() {}\n```";
    let doc = parse_document(md);
    assert_eq!(doc.len(), 2);

    let inline = parse_inline_for_block(&doc.blocks()[0]);
    assert_eq!(inline.len(), 1);
    assert_eq!(inline[0].len(), 3);

    let chatmark_engine::BlockKind::CodeBlock { language, code, .. } = &doc.blocks()[1].kind
    else {
        panic!("expected code block, got {:?}", doc.blocks()[1]);
    };
    let tokens = classify(code, language.as_deref().unwrap_or_default());
    let first = tokens[0];
    assert_eq!(first.text(code), "func");
    assert_eq!(first.category.map(|c| c.name()), Some("keyword"));
}

#[test]
fn reconstruction_of_inline_text() {
    let inputs = [
        "",
        "plain",
        "**a** _b_ ~~c~~ `d` [e](f)",
        "[**nested** label](http://x.y/z?q=1)",
        "unclosed ** and ` and [x](",
        "ümlaut *ïtalic* ✓",
    ];
    for text in inputs {
        let rebuilt: String = resolve(text).iter().map(|n| n.span().slice(text)).collect();
        assert_eq!(rebuilt, text);
    }
}

#[test]
fn link_children_cover_label() {
    let text = "[**nested** label](u)";
    let nodes = resolve(text);
    let InlineNode::Link {
        label, children, ..
    } = &nodes[0]
    else {
        panic!("expected link, got {nodes:?}");
    };
    let rebuilt: String = children.iter().map(|n| n.span().slice(text)).collect();
    assert_eq!(rebuilt, label.slice(text));
}

#[test]
fn strict_options_keep_every_line() {
    let md = "| A | B |\n|---|---|\n\n```\nopen";
    assert!(
        parse_document(md)
            .iter()
            .all(|b| b.kind_name() != "paragraph")
    );

    let strict = parse_document_with(md, ParseOptions::strict());
    let kinds: Vec<&str> = strict.iter().map(|b| b.kind_name()).collect();
    assert_eq!(kinds, vec!["paragraph", "paragraph"]);
}
