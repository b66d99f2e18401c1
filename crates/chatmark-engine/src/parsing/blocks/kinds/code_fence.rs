/// Metadata captured from a fence line's info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceInfo<'a> {
    /// First word of the info string, e.g. `rust`.
    pub language: Option<&'a str>,
    /// Second word of the info string, e.g. `main.rs`.
    pub filename: Option<&'a str>,
}

/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string of a line that opens or closes a fence.
    ///
    /// Any line beginning with three backticks qualifies; extra backticks are
    /// part of the delimiter. Words after the second are ignored.
    pub fn sig(line: &str) -> Option<FenceInfo<'_>> {
        if !line.starts_with(Self::BACKTICKS) {
            return None;
        }
        let mut words = line.trim_start_matches('`').split_whitespace();
        Some(FenceInfo {
            language: words.next(),
            filename: words.next(),
        })
    }

    /// True if `line` terminates an open fence.
    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
