use crate::span::Span;

/// A single line of the document with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line content, excluding `\n` or `\r\n`.
    pub span: Span,
    /// The line content without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their byte spans.
///
/// Splits on `\n` and strips one trailing `\r`, matching [`str::lines`]. A
/// trailing terminator does not produce an extra empty line.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let content = raw.strip_suffix('\n').unwrap_or(raw);
        let content = content.strip_suffix('\r').unwrap_or(content);
        LineRef {
            span: Span::new(start, start + content.len()),
            text: content,
        }
    })
}
