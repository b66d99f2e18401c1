//! Structural patterns shared by every language family.
//!
//! All patterns run on a single line, so `.` never has a newline to cross
//! and a block comment opened on one line is only closed on that line.

use std::sync::OnceLock;

use regex::Regex;

use super::{language::CommentStyle, types::TokenCategory};

/// One pattern scan: every match of `pattern` (or of its `group`) becomes a
/// candidate of `category`.
#[derive(Clone, Copy)]
pub struct Scan {
    pub category: TokenCategory,
    pub pattern: &'static Regex,
    pub group: usize,
}

impl Scan {
    fn whole(category: TokenCategory, pattern: &'static Regex) -> Self {
        Self {
            category,
            pattern,
            group: 0,
        }
    }
}

fn slash_line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//.*").expect("Invalid line comment regex"))
}

fn hash_line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#.*").expect("Invalid hash comment regex"))
}

/// `/* ... */`, or to the end of the line when unclosed.
fn block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*.*?(?:\*/|$)").expect("Invalid block comment regex"))
}

/// Double, single or backtick quoted, with backslash escapes. Unterminated
/// quotes do not match.
fn string_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#)
            .expect("Invalid string regex")
    })
}

/// Hex, binary, octal, decimal, float and exponent literals.
fn number_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
        )
        .expect("Invalid number regex")
    })
}

/// Identifier directly followed by `(`; group 1 is the name only.
fn function_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\(").expect("Invalid function call regex")
    })
}

/// Opening or closing markup tag name, without the closing `>`.
fn tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*").expect("Invalid tag regex"))
}

fn class_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z][A-Za-z0-9]*\b").expect("Invalid class name regex"))
}

fn operator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\.\.\.|[-+*/%=!<>&|^~?:;,@]+").expect("Invalid operator regex")
    })
}

/// Structural scans after the keyword scan, in collection order.
///
/// Collection order only matters for candidates with identical spans: the
/// earlier scan wins.
pub fn structural_scans(style: CommentStyle) -> Vec<Scan> {
    let mut scans = Vec::with_capacity(8);
    match style {
        CommentStyle::Slash => {
            scans.push(Scan::whole(TokenCategory::Comment, slash_line_comment()));
            scans.push(Scan::whole(TokenCategory::Comment, block_comment()));
        }
        CommentStyle::Hash => {
            scans.push(Scan::whole(TokenCategory::Comment, hash_line_comment()));
        }
    }
    scans.push(Scan::whole(TokenCategory::String, string_literal()));
    scans.push(Scan::whole(TokenCategory::Number, number_literal()));
    scans.push(Scan {
        category: TokenCategory::FunctionCall,
        pattern: function_call(),
        group: 1,
    });
    scans.push(Scan::whole(TokenCategory::Tag, tag()));
    scans.push(Scan::whole(TokenCategory::ClassName, class_name()));
    scans.push(Scan::whole(TokenCategory::Operator, operator()));
    scans
}
