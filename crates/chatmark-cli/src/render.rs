use std::str::FromStr;

use chatmark_config::Theme;
use chatmark_engine::{
    BlockKind, BlockNode, InlineKind, InlineNode, ParsedDoc, classify_code, parse_inline_for_block,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Resolves a theme color token, falling back to the terminal default.
pub fn color(theme: &Theme, category: &str) -> Color {
    let token = theme.color_for(category);
    Color::from_str(token).unwrap_or_else(|_| {
        log::debug!("unrecognised color {token:?} for {category}");
        Color::Reset
    })
}

/// Renders every block of a document to terminal lines, one blank line
/// between blocks.
pub fn render_document(doc: &ParsedDoc, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in doc.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(render_block(block, theme));
    }
    lines
}

pub fn render_block(block: &BlockNode, theme: &Theme) -> Vec<Line<'static>> {
    let inline = parse_inline_for_block(block);
    match &block.kind {
        BlockKind::Heading { level, text } => {
            let base = Style::default()
                .fg(color(theme, "heading"))
                .add_modifier(Modifier::BOLD);
            let mut spans = vec![Span::styled(
                format!("{} ", "#".repeat(usize::from(*level))),
                base,
            )];
            spans.extend(inline_spans(text, &inline[0], base, theme));
            split_lines(spans)
        }
        BlockKind::Paragraph { text } => {
            split_lines(inline_spans(text, &inline[0], Style::default(), theme))
        }
        BlockKind::BlockQuote { text } => {
            let base = Style::default().fg(color(theme, "blockquote"));
            split_lines(inline_spans(text, &inline[0], base, theme))
                .into_iter()
                .map(|line| prefixed(Span::styled("│ ", base), line))
                .collect()
        }
        BlockKind::List { ordered, items } => items
            .iter()
            .zip(&inline)
            .enumerate()
            .flat_map(|(n, (item, nodes))| {
                let marker = if *ordered {
                    format!("{}. ", n + 1)
                } else {
                    "• ".to_string()
                };
                let indent = " ".repeat(marker.chars().count());
                split_lines(inline_spans(item, nodes, Style::default(), theme))
                    .into_iter()
                    .enumerate()
                    .map(move |(row, line)| {
                        let lead = if row == 0 { marker.clone() } else { indent.clone() };
                        prefixed(Span::raw(lead), line)
                    })
                    .collect::<Vec<_>>()
            })
            .collect(),
        BlockKind::CodeBlock {
            language,
            filename,
            code,
        } => render_code(language.as_deref(), filename.as_deref(), code, theme),
        BlockKind::ThematicBreak => vec![Line::styled(
            "─".repeat(40),
            Style::default().add_modifier(Modifier::DIM),
        )],
        BlockKind::Table { rows } => render_table(rows),
    }
}

fn render_code(
    language: Option<&str>,
    filename: Option<&str>,
    code: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let header = [language, filename]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![Line::styled(format!("```{header}"), dim)];
    for (line, tokens) in code
        .split('\n')
        .zip(classify_code(code, language.unwrap_or_default()))
    {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let spans: Vec<Span<'static>> = tokens
            .iter()
            .map(|t| {
                let style = t.category.map_or_else(Style::default, |c| {
                    Style::default().fg(color(theme, c.name()))
                });
                Span::styled(t.text(line).to_string(), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled("```", dim));
    lines
}

fn render_table(rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(c, w)| format!("{:<w$}", row.get(c).map_or("", String::as_str)))
            .collect();
        let text = cells.join(" │ ");
        if i == 0 {
            lines.push(Line::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
            lines.push(Line::raw(rule.join("─┼─")));
        } else {
            lines.push(Line::raw(text));
        }
    }
    lines
}

/// Styled spans for one text unit. Literal runs take `base`; claimed spans
/// show their inner text with the category's style patched over `base`.
fn inline_spans(
    text: &str,
    nodes: &[InlineNode],
    base: Style,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push(Span::styled(sp.slice(text).to_string(), base)),
            InlineNode::Styled { kind, inner, .. } => {
                let style = base.patch(inline_style(*kind, theme));
                out.push(Span::styled(inner.slice(text).to_string(), style));
            }
            InlineNode::Link {
                destination,
                children,
                ..
            } => {
                let style = base.patch(inline_style(InlineKind::Link, theme));
                out.extend(inline_spans(text, children, style, theme));
                out.push(Span::styled(
                    format!(" ({})", destination.slice(text)),
                    base.add_modifier(Modifier::DIM),
                ));
            }
        }
    }
    out
}

fn inline_style(kind: InlineKind, theme: &Theme) -> Style {
    match kind {
        InlineKind::Bold => Style::default().add_modifier(Modifier::BOLD),
        InlineKind::Italic => Style::default().add_modifier(Modifier::ITALIC),
        InlineKind::Strikethrough => Style::default().add_modifier(Modifier::CROSSED_OUT),
        InlineKind::InlineCode => Style::default().fg(color(theme, kind.name())),
        InlineKind::Link => Style::default()
            .fg(color(theme, kind.name()))
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Breaks spans at embedded newlines into separate lines.
fn split_lines(spans: Vec<Span<'static>>) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut current: Vec<Span<'static>> = vec![];
    for span in spans {
        let mut parts = span.content.split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), span.style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), span.style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

fn prefixed(lead: Span<'static>, line: Line<'static>) -> Line<'static> {
    let mut spans = vec![lead];
    spans.extend(line.spans);
    Line::from(spans)
}
