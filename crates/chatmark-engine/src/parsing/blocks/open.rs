use super::{
    classify::LineClass,
    kinds::{FenceInfo, HeadingLine},
};

/// The block a line opens, decided by recogniser priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode(FenceInfo<'a>),
    Heading(HeadingLine<'a>),
    ThematicBreak,
    BlockQuote,
    List { ordered: bool },
    Table,
}

/// Returns the block opened by line `i`, or `None` for blank and paragraph lines.
///
/// Precedence: fence, heading, rule, quote, unordered list, ordered list,
/// table. The first recogniser that matches suppresses the rest. Tables are
/// the only recogniser that looks ahead, at the delimiter row on line `i + 1`.
pub fn try_open<'a>(lines: &[LineClass<'a>], i: usize) -> Option<BlockOpen<'a>> {
    let c = lines.get(i)?;

    if let Some(info) = c.fence {
        return Some(BlockOpen::FencedCode(info));
    }
    if let Some(heading) = c.heading {
        return Some(BlockOpen::Heading(heading));
    }
    if c.is_rule {
        return Some(BlockOpen::ThematicBreak);
    }
    if c.quote.is_some() {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some(item) = c.list_item {
        return Some(BlockOpen::List {
            ordered: item.ordered,
        });
    }
    if c.has_pipe && lines.get(i + 1).is_some_and(|next| next.is_table_separator) {
        return Some(BlockOpen::Table);
    }
    None
}
