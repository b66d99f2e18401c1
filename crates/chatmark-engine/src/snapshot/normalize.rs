use std::fmt;

use serde::Serialize;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
    parse_inline_for_block,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub detail: String,
    /// One entry per text unit (a single one except for list items).
    pub inline: Vec<Vec<InlineSnap>>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub children: Vec<InlineSnap>,
}

/// Converts parsed blocks to a stable structure for snapshot assertions.
pub fn normalize(blocks: &[BlockNode]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let detail = match &b.kind {
                BlockKind::Heading { level, text } => format!("level={level} {text:?}"),
                BlockKind::Paragraph { text } | BlockKind::BlockQuote { text } => {
                    format!("{text:?}")
                }
                BlockKind::CodeBlock {
                    language,
                    filename,
                    code,
                } => format!(
                    "lang={} file={} {code:?}",
                    language.as_deref().unwrap_or("-"),
                    filename.as_deref().unwrap_or("-")
                ),
                BlockKind::List { ordered, items } => {
                    format!("ordered={ordered} items={}", items.len())
                }
                BlockKind::ThematicBreak => String::new(),
                BlockKind::Table { rows } => format!("rows={}", rows.len()),
            };

            let units: Vec<&str> = match &b.kind {
                BlockKind::List { items, .. } => items.iter().map(String::as_str).collect(),
                BlockKind::CodeBlock { .. } => vec![],
                _ => b.raw_text().into_iter().collect(),
            };
            let inline = parse_inline_for_block(b)
                .iter()
                .zip(units)
                .map(|(nodes, text)| inline_snaps(text, nodes))
                .collect();

            let rows = match &b.kind {
                BlockKind::Table { rows } => rows.clone(),
                _ => vec![],
            };

            BlockSnap {
                kind: b.kind_name().to_string(),
                span: (b.span.start, b.span.end),
                detail,
                inline,
                rows,
            }
        })
        .collect();

    Snap { blocks }
}

fn inline_snaps(text: &str, nodes: &[InlineNode]) -> Vec<InlineSnap> {
    nodes
        .iter()
        .map(|n| {
            let span = n.span();
            let children = match n {
                InlineNode::Link { children, .. } => inline_snaps(text, children),
                _ => vec![],
            };
            InlineSnap {
                kind: n.kind().map_or("text", |k| k.name()).to_string(),
                span: (span.start, span.end),
                text: span.slice(text).to_string(),
                children,
            }
        })
        .collect()
}

/// One line per block, inline nodes indented beneath their block.
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            write!(f, "{}[{}..{}]", b.kind, b.span.0, b.span.1)?;
            if !b.detail.is_empty() {
                write!(f, " {}", b.detail)?;
            }
            writeln!(f)?;
            for row in &b.rows {
                writeln!(f, "  row {row:?}")?;
            }
            let numbered = b.inline.len() > 1 || b.kind == "list";
            for (i, unit) in b.inline.iter().enumerate() {
                let depth = if numbered {
                    writeln!(f, "  item {i}")?;
                    2
                } else {
                    1
                };
                write_inline(f, unit, depth)?;
            }
        }
        Ok(())
    }
}

fn write_inline(f: &mut fmt::Formatter<'_>, nodes: &[InlineSnap], depth: usize) -> fmt::Result {
    for n in nodes {
        writeln!(f, "{:indent$}{} {:?}", "", n.kind, n.text, indent = depth * 2)?;
        write_inline(f, &n.children, depth + 1)?;
    }
    Ok(())
}
