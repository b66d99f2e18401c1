use crate::{parsing::options::ParseOptions, span::Span};

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceInfo, HeadingLine, Table},
    open::{BlockOpen, try_open},
    types::{BlockKind, BlockNode},
};

/// Phase 2 of block parsing: groups classified lines into block nodes.
///
/// A single forward pass with a line cursor. Each step either skips a blank
/// line or consumes one whole block, so blocks come out in source order and
/// never nest.
pub struct BlockBuilder<'a> {
    lines: Vec<LineClass<'a>>,
    options: ParseOptions,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: Vec<LineClass<'a>>, options: ParseOptions) -> Self {
        Self {
            lines,
            options,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        let mut i = 0;
        while i < self.lines.len() {
            let next = self.step(i);
            debug_assert!(next > i, "block builder stalled at line {i}");
            i = next;
        }
        self.out
    }

    /// Consumes the block starting at line `i` and returns the next line index.
    fn step(&mut self, i: usize) -> usize {
        match try_open(&self.lines, i) {
            Some(BlockOpen::FencedCode(info)) => self.consume_fence(i, info),
            Some(BlockOpen::Heading(heading)) => self.consume_heading(i, heading),
            Some(BlockOpen::ThematicBreak) => {
                self.emit(BlockKind::ThematicBreak, i, i);
                i + 1
            }
            Some(BlockOpen::BlockQuote) => self.consume_quote(i),
            Some(BlockOpen::List { ordered }) => self.consume_list(i, ordered),
            Some(BlockOpen::Table) => self.consume_table(i),
            None if self.lines[i].is_blank => i + 1,
            None => self.consume_paragraph(i),
        }
    }

    fn emit(&mut self, kind: BlockKind, first: usize, last: usize) {
        let span = Span::new(self.lines[first].line.start, self.lines[last].line.end);
        self.out.push(BlockNode { kind, span });
    }

    /// Joins the raw text of lines `first..end` with `\n`.
    fn join_raw(&self, first: usize, end: usize) -> String {
        self.lines[first..end]
            .iter()
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn consume_fence(&mut self, i: usize, info: FenceInfo<'a>) -> usize {
        let n = self.lines.len();
        let close = (i + 1..n).find(|&j| CodeFence::closes(self.lines[j].text));

        let Some(close) = close else {
            log::debug!("unterminated code fence at line {}", i + 1);
            if self.options.strict_fences {
                let text = self.join_raw(i, n);
                self.emit(BlockKind::Paragraph { text }, i, n - 1);
            } else {
                let code = self.join_raw(i + 1, n);
                self.emit(fence_kind(info, code), i, n - 1);
            }
            return n;
        };

        let code = self.join_raw(i + 1, close);
        self.emit(fence_kind(info, code), i, close);
        close + 1
    }

    fn consume_heading(&mut self, i: usize, heading: HeadingLine<'a>) -> usize {
        self.emit(
            BlockKind::Heading {
                level: heading.level,
                text: heading.text.to_string(),
            },
            i,
            i,
        );
        i + 1
    }

    /// Quote lines and blank lines are consumed together; trailing blank
    /// lines are trimmed from the captured text.
    fn consume_quote(&mut self, i: usize) -> usize {
        let mut parts: Vec<&str> = vec![];
        let mut last_kept = i;
        let mut j = i;
        while let Some(c) = self.lines.get(j) {
            let part = match c.quote {
                Some(q) => q,
                None if c.is_blank => "",
                None => break,
            };
            parts.push(part);
            if !part.trim().is_empty() {
                last_kept = j;
            }
            j += 1;
        }

        parts.truncate(last_kept - i + 1);
        let text = parts.join("\n");
        self.emit(BlockKind::BlockQuote { text }, i, last_kept);
        j
    }

    /// Consumes contiguous items with the same marker kind. Switching between
    /// bullets and numbers ends the list.
    fn consume_list(&mut self, i: usize, ordered: bool) -> usize {
        let mut items = vec![];
        let mut j = i;
        while let Some(item) = self.lines.get(j).and_then(|c| c.list_item) {
            if item.ordered != ordered {
                break;
            }
            items.push(item.text.to_string());
            j += 1;
        }
        self.emit(BlockKind::List { ordered, items }, i, j - 1);
        j
    }

    /// Consumes contiguous lines containing `|`. Delimiter rows are dropped and
    /// a table needs a header plus at least one data row to be emitted.
    fn consume_table(&mut self, i: usize) -> usize {
        let mut j = i;
        while self.lines.get(j).is_some_and(|c| c.has_pipe) {
            j += 1;
        }

        let rows: Vec<Vec<String>> = self.lines[i..j]
            .iter()
            .filter(|c| !c.is_table_separator)
            .map(|c| Table::split_row(c.text))
            .collect();

        if rows.len() >= 2 {
            self.emit(BlockKind::Table { rows }, i, j - 1);
        } else {
            log::debug!(
                "table at line {} has no data rows, {} lines dropped",
                i + 1,
                j - i
            );
            if self.options.strict_tables {
                let text = self.join_raw(i, j);
                self.emit(BlockKind::Paragraph { text }, i, j - 1);
            }
        }
        j
    }

    /// Consumes lines until a blank line or a line that opens another block.
    fn consume_paragraph(&mut self, i: usize) -> usize {
        let mut j = i + 1;
        while j < self.lines.len()
            && !self.lines[j].is_blank
            && try_open(&self.lines, j).is_none()
        {
            j += 1;
        }
        let text = self.join_raw(i, j);
        self.emit(BlockKind::Paragraph { text }, i, j - 1);
        j
    }
}

fn fence_kind(info: FenceInfo<'_>, code: String) -> BlockKind {
    BlockKind::CodeBlock {
        language: info.language.map(str::to_string),
        filename: info.filename.map(str::to_string),
        code,
    }
}
