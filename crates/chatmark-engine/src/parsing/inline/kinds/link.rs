use std::sync::OnceLock;

use regex::Regex;

/// `[label](destination)` links.
pub struct Link;

impl Link {
    /// Group 1 is the label, group 2 the destination.
    pub fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }
}
