/// Switches for the two lossy fallbacks of the block tokenizer.
///
/// Both default to `false`, which keeps the lossy behaviour: a table without
/// data rows is dropped and an unterminated fence swallows the rest of the
/// document. Setting a flag re-emits the consumed lines as a paragraph instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Keep header-only tables as paragraph text.
    pub strict_tables: bool,
    /// Keep an unclosed fence and everything after it as paragraph text.
    pub strict_fences: bool,
}

impl ParseOptions {
    /// Both strict behaviours enabled.
    pub fn strict() -> Self {
        Self {
            strict_tables: true,
            strict_fences: true,
        }
    }
}
