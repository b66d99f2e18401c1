use std::sync::OnceLock;

use regex::Regex;

/// Backtick-delimited code span.
///
/// Content is taken verbatim. Because emphasis categories run first, a code
/// span only claims text that no emphasis already claimed.
pub struct CodeSpan;

impl CodeSpan {
    pub fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }
}
