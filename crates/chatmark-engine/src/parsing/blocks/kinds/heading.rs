/// A line recognised as an ATX heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Number of leading `#` characters (1-6).
    pub level: u8,
    /// Heading text with surrounding whitespace removed.
    pub text: &'a str,
}

/// ATX heading block type.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses `#`..`######` followed by at least one space and some text.
    ///
    /// Seven or more `#`, a missing space, or an empty title are not headings.
    pub fn parse(line: &str) -> Option<HeadingLine<'_>> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(' ') {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some(HeadingLine {
            level: hashes as u8,
            text,
        })
    }
}
