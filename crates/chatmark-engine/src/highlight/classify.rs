use crate::span::Span;

use super::{
    language::LanguageFamily,
    patterns::{Scan, structural_scans},
    types::{TokenCategory, TokenSpan},
};

/// Classifies one line of code for a fence language name.
pub fn classify(line: &str, language: &str) -> Vec<TokenSpan> {
    classify_family(line, LanguageFamily::from_language(language))
}

/// Classifies one line of code into non-overlapping token runs.
///
/// Every scan contributes candidates. Candidates are ordered by start
/// ascending, then length descending (stable, so identical spans keep
/// collection order with keywords first) and swept left to right: a candidate
/// is accepted only if it starts at or after the end of the last accepted one.
/// Gaps between accepted tokens become unclassified runs.
///
/// # Returns
/// Runs covering `line` exactly, in order. Empty input yields no runs.
pub fn classify_family(line: &str, family: LanguageFamily) -> Vec<TokenSpan> {
    if line.is_empty() {
        return vec![];
    }

    let mut candidates = Vec::new();
    let keyword = Scan {
        category: TokenCategory::Keyword,
        pattern: family.keyword_pattern(),
        group: 0,
    };
    for scan in std::iter::once(keyword).chain(structural_scans(family.comment_style())) {
        collect(line, scan, &mut candidates);
    }

    candidates.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out = Vec::with_capacity(candidates.len() * 2 + 1);
    let mut last_end = 0;
    for (span, category) in candidates {
        if span.start < last_end {
            continue;
        }
        if span.start > last_end {
            out.push(TokenSpan {
                span: Span::new(last_end, span.start),
                category: None,
            });
        }
        out.push(TokenSpan {
            span,
            category: Some(category),
        });
        last_end = span.end;
    }
    if last_end < line.len() {
        out.push(TokenSpan {
            span: Span::new(last_end, line.len()),
            category: None,
        });
    }

    #[cfg(debug_assertions)]
    crate::snapshot::invariants::check_tokens(line, &out);

    out
}

/// Classifies a whole code block line by line.
///
/// Spans are relative to their own line; lines are split on `\n` with any
/// trailing `\r` dropped.
pub fn classify_code(code: &str, language: &str) -> Vec<Vec<TokenSpan>> {
    let family = LanguageFamily::from_language(language);
    log::trace!("classifying {} bytes as {family:?}", code.len());
    code.split('\n')
        .map(|line| classify_family(line.strip_suffix('\r').unwrap_or(line), family))
        .collect()
}

fn collect(line: &str, scan: Scan, out: &mut Vec<(Span, TokenCategory)>) {
    for caps in scan.pattern.captures_iter(line) {
        if let Some(m) = caps.get(scan.group)
            && !m.is_empty()
        {
            out.push((Span::from(m.range()), scan.category));
        }
    }
}
