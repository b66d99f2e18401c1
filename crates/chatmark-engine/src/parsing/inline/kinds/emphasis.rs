use std::sync::OnceLock;

use regex::Regex;

/// `**bold**` and `__bold__`.
pub struct Bold;

impl Bold {
    pub fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").expect("Invalid bold regex"))
    }
}

/// `*italic*` and `_italic_`.
pub struct Italic;

impl Italic {
    pub fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*(.+?)\*|_(.+?)_").expect("Invalid italic regex"))
    }
}

/// `~~strikethrough~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"~~(.+?)~~").expect("Invalid strikethrough regex"))
    }
}
