use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Keyword-set grouping for the highlighter.
///
/// Many fence languages share one family; anything unrecognised falls back
/// to [`LanguageFamily::CFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageFamily {
    #[default]
    CFamily,
    Python,
    Go,
    Rust,
}

/// How a family writes comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// line` and `/* block */`.
    Slash,
    /// `# line`.
    Hash,
}

const C_FAMILY_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "auto", "await", "bool", "boolean", "break", "case", "catch",
    "char", "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "export", "extends", "extern", "false", "final", "finally", "float", "for", "from",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "namespace", "new", "null", "of", "override", "package", "private",
    "protected", "public", "readonly", "register", "return", "short", "signed", "sizeof",
    "static", "struct", "super", "switch", "template", "this", "throw", "true", "try", "type",
    "typedef", "typename", "typeof", "undefined", "union", "unsigned", "using", "var", "virtual",
    "void", "volatile", "while", "with", "yield",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return",
    "self", "try", "while", "with", "yield",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "false", "for", "func", "go", "goto", "if", "import", "interface", "iota", "map", "nil",
    "package", "range", "return", "select", "struct", "switch", "true", "type", "var",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "Self", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

impl LanguageFamily {
    /// Maps a fence language name (case-insensitive) to its family.
    pub fn from_language(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "py" | "python" | "python3" | "py3" => LanguageFamily::Python,
            "go" | "golang" => LanguageFamily::Go,
            "rs" | "rust" => LanguageFamily::Rust,
            "" | "c" | "h" | "cpp" | "c++" | "cc" | "hpp" | "cs" | "csharp" | "c#" | "java"
            | "kotlin" | "kt" | "swift" | "js" | "javascript" | "jsx" | "mjs" | "cjs" | "ts"
            | "typescript" | "tsx" | "php" | "dart" | "scala" | "html" | "xml" | "vue"
            | "svelte" => LanguageFamily::CFamily,
            other => {
                log::debug!("unknown language {other:?}, using C-family keywords");
                LanguageFamily::CFamily
            }
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            LanguageFamily::CFamily => C_FAMILY_KEYWORDS,
            LanguageFamily::Python => PYTHON_KEYWORDS,
            LanguageFamily::Go => GO_KEYWORDS,
            LanguageFamily::Rust => RUST_KEYWORDS,
        }
    }

    pub fn comment_style(self) -> CommentStyle {
        match self {
            LanguageFamily::Python => CommentStyle::Hash,
            LanguageFamily::CFamily | LanguageFamily::Go | LanguageFamily::Rust => {
                CommentStyle::Slash
            }
        }
    }

    /// Whole-word alternation of the family's keywords, compiled once.
    pub fn keyword_pattern(self) -> &'static Regex {
        static C_FAMILY: OnceLock<Regex> = OnceLock::new();
        static PYTHON: OnceLock<Regex> = OnceLock::new();
        static GO: OnceLock<Regex> = OnceLock::new();
        static RUST: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            LanguageFamily::CFamily => &C_FAMILY,
            LanguageFamily::Python => &PYTHON,
            LanguageFamily::Go => &GO,
            LanguageFamily::Rust => &RUST,
        };
        cell.get_or_init(|| {
            let words = self.keywords().join("|");
            Regex::new(&format!(r"\b(?:{words})\b")).expect("Invalid keyword regex")
        })
    }
}
