//! Character cursor and string-literal tracking shared by every scanner.
//!
//! Scanners work over a `Vec<char>` snapshot of their input so lookahead and
//! lookbehind are O(1) and never split a UTF-8 sequence.

/// A character cursor over a snapshot of the input.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character `n` positions ahead of the cursor (`peek(0)` is `current()`).
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// The character immediately before the cursor.
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|i| self.chars.get(i).copied())
    }

    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Advance by `n` characters, stopping at the end of input.
    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.chars.len());
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Collect the characters in `start..end` (char indices) into a `String`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Check whether the input at the cursor starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, expected)| self.peek(i) == Some(expected))
    }

    /// Whether the character under the cursor is escaped.
    ///
    /// A character is escaped when it is preceded by an odd-length run of
    /// backslashes, so `\"` is escaped while `\\"` is not.
    pub fn is_escaped(&self) -> bool {
        let run = self.chars[..self.pos.min(self.chars.len())]
            .iter()
            .rev()
            .take_while(|&&c| c == '\\')
            .count();
        run % 2 == 1
    }

    /// Whether the cursor sits at the start of a `//`, `/*` or `/**` comment.
    pub fn at_comment_start(&self) -> bool {
        self.current() == Some('/') && matches!(self.peek(1), Some('/') | Some('*'))
    }
}

/// Tracks whether a scanner is inside a string literal and which quote opened it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringTracker {
    quote: Option<char>,
}

impl StringTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn in_string(&self) -> bool {
        self.quote.is_some()
    }

    /// The quote that opened the current string, if any.
    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    /// Feed one character to the tracker.
    ///
    /// Returns `true` if the character opened or closed a string literal.
    /// Quotes of a different kind than the opener are inert inside a string.
    pub fn handle_string_literal(&mut self, ch: char, escaped: bool) -> bool {
        if !is_quote(ch) || escaped {
            return false;
        }
        match self.quote {
            None => {
                self.quote = Some(ch);
                true
            }
            Some(open) if open == ch => {
                self.quote = None;
                true
            }
            Some(_) => false,
        }
    }

    /// Feed the character under `cursor`, using the cursor's escape rule.
    pub fn handle_at(&mut self, cursor: &Cursor) -> bool {
        match cursor.current() {
            Some(ch) => self.handle_string_literal(ch, cursor.is_escaped()),
            None => false,
        }
    }
}

#[inline]
pub fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '`')
}
