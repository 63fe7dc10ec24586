//! Top-level splitting of type expressions.
//!
//! Splits `A & B<C, D> & { e: F }` on a separator only where it appears
//! outside every `<>`, `()`, `[]` and `{}` pair, string literal and comment.

use crate::base::{Cursor, StringTracker};

/// Split `text` on any of `separators` at nesting depth zero.
///
/// Parts are trimmed and empty parts are dropped, so a leading separator
/// (`| 'a' | 'b'`) produces no empty first element.
pub fn split_top_level(text: &str, separators: &[char]) -> Vec<String> {
    let mut cursor = Cursor::new(text);
    let mut strings = StringTracker::new();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut angle: i32 = 0;

    while let Some(ch) = cursor.current() {
        if strings.handle_at(&cursor) || strings.in_string() {
            current.push(ch);
            cursor.advance();
            continue;
        }

        if cursor.at_comment_start() {
            let end = comment_end(&cursor);
            current.push_str(&cursor.slice(cursor.pos(), end));
            cursor.set_pos(end);
            continue;
        }

        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = (depth - 1).max(0),
            '<' => angle += 1,
            // `=>` is an arrow, not a generic closer
            '>' if cursor.previous() != Some('=') => angle = (angle - 1).max(0),
            c if depth == 0 && angle == 0 && separators.contains(&c) => {
                push_part(&mut parts, &current);
                current.clear();
                cursor.advance();
                continue;
            }
            _ => {}
        }
        current.push(ch);
        cursor.advance();
    }

    push_part(&mut parts, &current);
    parts
}

fn push_part(parts: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

/// Char index just past the comment starting at the cursor.
pub(crate) fn comment_end(cursor: &Cursor) -> usize {
    let start = cursor.pos();
    let mut probe = cursor.clone();
    if probe.peek(1) == Some('/') {
        while let Some(c) = probe.current() {
            if c == '\n' {
                break;
            }
            probe.advance();
        }
        return probe.pos();
    }
    probe.set_pos(start + 2);
    while !probe.is_at_end() {
        if probe.current() == Some('*') && probe.peek(1) == Some('/') {
            return probe.pos() + 2;
        }
        probe.advance();
    }
    probe.pos()
}

/// Strip a generic argument suffix: `Props<T>` → `Props`.
pub fn strip_generics(name: &str) -> &str {
    match name.find('<') {
        Some(idx) => name[..idx].trim_end(),
        None => name.trim(),
    }
}
