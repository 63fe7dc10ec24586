//! Text normalization for captured type, default-value and comment text.
//!
//! Every normalizer here is idempotent: applying it to its own output is a
//! no-op. The string-aware variants leave the contents of string literals
//! untouched so literal types like `'a  b'` survive normalization.

use super::cursor::{Cursor, StringTracker};

/// Check if a character can start an identifier (`$` and `_` included).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// Trim `text` and, if it spans several lines, strip the minimum common
/// leading whitespace of every non-empty line after the first.
///
/// The first line is excluded from the indent computation because captured
/// text always starts right after a delimiter (`:` or `=`), never at the
/// start of a source line.
pub fn dedent(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.contains('\n') {
        return trimmed.to_string();
    }

    let mut lines = trimmed.lines();
    let first = lines.next().unwrap_or("");
    let rest: Vec<&str> = lines.collect();

    let indent = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(trimmed.len());
    out.push_str(first.trim_end());
    for line in rest {
        out.push('\n');
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(strip_leading_whitespace(line, indent).trim_end());
    }
    out
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_leading_whitespace(line: &str, count: usize) -> &str {
    let mut stripped = 0;
    for (idx, ch) in line.char_indices() {
        if stripped == count || !ch.is_whitespace() {
            return &line[idx..];
        }
        stripped += 1;
    }
    ""
}

/// Collapse every whitespace run outside string literals into one space and
/// trim the result.
pub fn collapse_whitespace(text: &str) -> String {
    let mut cursor = Cursor::new(text.trim());
    let mut strings = StringTracker::new();
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    while let Some(ch) = cursor.current() {
        let toggled = strings.handle_at(&cursor);
        if !toggled && !strings.in_string() && ch.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
        cursor.advance();
    }
    out
}

/// Collapse whitespace without regard for quotes: comment prose contains
/// apostrophes that must not be read as string delimiters.
pub fn collapse_plain_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tidy spacing just inside brackets: none inside `()`, `[]` and `<>`, a
/// single space inside a non-empty `{}` and none inside an empty one.
pub fn tidy_brackets(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut strings = StringTracker::new();
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut cursor = Cursor::new(text);

    while let Some(ch) = cursor.current() {
        let toggled = strings.handle_at(&cursor);
        if toggled || strings.in_string() {
            out.push(ch);
            cursor.advance();
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                let next_here = next_non_whitespace(&chars, cursor.pos());
                let after_opener = matches!(out.last(), Some('(' | '[' | '<' | ' ') | None);
                let before_closer = matches!(next_here, Some(')' | ']' | '>' | '}') | None);
                if !after_opener && !before_closer && !out.last().is_some_and(|c| c.is_whitespace()) {
                    out.push(' ');
                }
            }
            '{' => {
                out.push('{');
                let next = next_non_whitespace(&chars, cursor.pos() + 1);
                if next.is_some_and(|n| n != '}') {
                    out.push(' ');
                }
            }
            '}' => {
                if !matches!(out.last(), Some('{' | ' ') | None) {
                    out.push(' ');
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
        cursor.advance();
    }

    out.into_iter().collect::<String>().trim().to_string()
}

fn next_non_whitespace(chars: &[char], from: usize) -> Option<char> {
    chars.iter().skip(from).copied().find(|c| !c.is_whitespace())
}

/// Normalize type text: collapse whitespace, then tidy bracket spacing.
pub fn normalize_type(text: &str) -> String {
    tidy_brackets(&collapse_whitespace(text))
}

/// Normalize default-value text: collapse whitespace outside strings.
pub fn normalize_default_value(text: &str) -> String {
    collapse_whitespace(text)
}

/// Normalize comment prose onto a single line.
pub fn normalize_comment(text: &str) -> String {
    collapse_plain_whitespace(text)
}

/// Strip the `*` gutter from the raw text of a `/** ... */` comment.
///
/// `raw` is the text between the opening `/**` and the closing `*/`.
pub fn clean_doc_comment(raw: &str) -> String {
    let lines: Vec<&str> = raw
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').map(str::trim_start).unwrap_or(line)
        })
        .collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
