/// Pipe table block type.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    /// Characters allowed in a delimiter row besides whitespace.
    pub const SEPARATOR_CHARS: [char; 3] = ['|', '-', ':'];

    /// True if the line could be a table row.
    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// True for a delimiter row such as `| --- | :-: |`, `|:|:|` or `| | |`.
    ///
    /// Only pipes, dashes, colons and whitespace are allowed. Blank lines are
    /// not delimiter rows.
    pub fn is_separator(line: &str) -> bool {
        line.chars().any(|c| Self::SEPARATOR_CHARS.contains(&c))
            && line
                .chars()
                .all(|c| c.is_whitespace() || Self::SEPARATOR_CHARS.contains(&c))
    }

    /// Splits a row into trimmed cells.
    ///
    /// The empty cells produced by a leading or trailing pipe are dropped;
    /// empty cells between pipes are kept.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let mut cells: Vec<&str> = t.split(Self::PIPE).map(str::trim).collect();
        if t.ends_with(Self::PIPE) && cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        if t.starts_with(Self::PIPE) && cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        cells.into_iter().map(str::to_string).collect()
    }
}
