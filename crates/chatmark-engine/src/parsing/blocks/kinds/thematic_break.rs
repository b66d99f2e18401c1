/// Horizontal rule (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '_', '*'];
    pub const MIN_RUN: usize = 3;

    /// True if the trimmed line is three or more of a single marker character.
    ///
    /// Interior spaces disqualify the line: `- - -` is not a rule.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::MARKERS.contains(&first) && t.len() >= Self::MIN_RUN && chars.all(|c| c == first)
    }
}
