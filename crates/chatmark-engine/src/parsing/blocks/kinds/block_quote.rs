/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote prefix from a line.
    ///
    /// Removes the leading `>` and at most one following space. Further `>`
    /// characters are kept as text since quotes do not nest.
    ///
    /// # Returns
    /// The quoted text, or `None` if the line doesn't begin with `>`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
