/// A line recognised as a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemLine<'a> {
    /// `1.` style marker rather than `-`, `*` or `+`.
    pub ordered: bool,
    /// Item text after the marker.
    pub text: &'a str,
}

/// Flat list block type. Markers start at column 0; an indented marker is
/// plain text.
pub struct List;

impl List {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITER: u8 = b'.';

    /// Parses `- item`, `* item`, `+ item` or `12. item`.
    pub fn parse(line: &str) -> Option<ListItemLine<'_>> {
        let b = line.as_bytes();

        if let Some(&first) = b.first()
            && Self::BULLETS.contains(&first)
        {
            return Self::after_marker(line, 1).map(|text| ListItemLine {
                ordered: false,
                text,
            });
        }

        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 && b.get(digits) == Some(&Self::ORDERED_DELIMITER) {
            return Self::after_marker(line, digits + 1).map(|text| ListItemLine {
                ordered: true,
                text,
            });
        }

        None
    }

    /// The marker must be followed by a space; returns the trimmed text.
    fn after_marker(line: &str, marker_len: usize) -> Option<&str> {
        let rest = &line[marker_len..];
        rest.starts_with(' ').then(|| rest.trim())
    }
}
