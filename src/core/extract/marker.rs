//! Marker recognition for a single, already undecorated, comment line.

use regex::Regex;
use std::sync::LazyLock;

/// Recognized marker keywords, tried in order.
pub const MARKER_KEYWORDS: &[&str] = &["TODO", "FIXME"];

/// Comment delimiters stripped from the start of a line (one layer only).
const DECORATIONS: &[&str] = &["//", "/*", "*/"];

// Matches a leading parenthesized assignee: "(alice)", "(quentin renard)",
// "(my.weird-email_address+1@email.com)". ASCII word characters only.
static ASSIGNEE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([A-Za-z0-9_ .+\-@]+\)").unwrap());

/// A marker line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub assignee: String,
    /// Text following the marker and assignee, possibly empty.
    pub text: String,
}

/// Trim a physical comment line and strip a single leading `//`, `/*` or `*/`.
///
/// A bare leading `*` (the usual block comment gutter) is kept.
pub fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    DECORATIONS
        .iter()
        .find_map(|d| line.strip_prefix(d))
        .map_or(line, str::trim)
}

/// Parse an undecorated, trimmed line as a marker line.
///
/// Returns `None` when the line does not start with a marker keyword.
pub fn parse_marker(line: &str) -> Option<Marker> {
    let keyword_len = keyword_len(line)?;
    let rest = strip_colons(line[keyword_len..].trim());

    match ASSIGNEE_REGEX.find(rest) {
        Some(m) => {
            let span = m.as_str();
            Some(Marker {
                assignee: span[1..span.len() - 1].to_string(),
                text: strip_colons(rest[m.end()..].trim()).to_string(),
            })
        }
        None => Some(Marker {
            assignee: String::new(),
            text: rest.to_string(),
        }),
    }
}

/// Byte length of the keyword `line` starts with, compared case-insensitively.
fn keyword_len(line: &str) -> Option<usize> {
    MARKER_KEYWORDS.iter().find_map(|keyword| {
        line.get(..keyword.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(keyword))
            .map(|_| keyword.len())
    })
}

/// `TODO:`, `TODO :` and `TODO::` are all equivalent to a bare `TODO`.
fn strip_colons(text: &str) -> &str {
    if text.starts_with(':') {
        text.trim_start_matches(':').trim()
    } else {
        text
    }
}
