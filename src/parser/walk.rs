//! Code-level navigation over whole script fragments.
//!
//! [`CodeWalker`] moves a [`Cursor`] across script text while stepping over
//! string literals and comments, so declaration and statement finders only
//! ever look at code characters.

use crate::base::{Cursor, StringTracker, is_ident_char, is_ident_start};
use crate::parser::split::comment_end;

#[derive(Debug, Clone)]
pub struct CodeWalker {
    cursor: Cursor,
    strings: StringTracker,
}

impl CodeWalker {
    pub fn new(text: &str) -> Self {
        Self {
            cursor: Cursor::new(text),
            strings: StringTracker::new(),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.cursor.set_pos(pos);
        self.strings = StringTracker::new();
    }

    pub fn current(&self) -> Option<char> {
        self.cursor.current()
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Step over string literals and comments; return the code character
    /// now under the cursor without consuming it.
    pub fn skip_inert(&mut self) -> Option<char> {
        loop {
            let ch = self.cursor.current()?;
            if self.strings.handle_at(&self.cursor) || self.strings.in_string() {
                self.cursor.advance();
                continue;
            }
            if self.cursor.at_comment_start() {
                let end = comment_end(&self.cursor);
                self.cursor.set_pos(end);
                continue;
            }
            return Some(ch);
        }
    }

    /// Skip whitespace and comments.
    pub fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                Some(c) if c.is_whitespace() => self.cursor.advance(),
                Some('/') if self.cursor.at_comment_start() => {
                    let end = comment_end(&self.cursor);
                    self.cursor.set_pos(end);
                }
                _ => return,
            }
        }
    }

    /// Whether the cursor is at the start of a standalone identifier, i.e. not
    /// the tail of a longer identifier or a member access.
    pub fn at_word_start(&self) -> bool {
        self.cursor.current().is_some_and(is_ident_start)
            && !self
                .cursor
                .previous()
                .is_some_and(|c| is_ident_char(c) || c == '.')
    }

    /// Whether `word` starts at the cursor and is not followed by more
    /// identifier characters.
    pub fn at_word(&self, word: &str) -> bool {
        self.cursor.starts_with(word)
            && !self
                .cursor
                .peek(word.chars().count())
                .is_some_and(is_ident_char)
    }

    /// Read an identifier at the cursor.
    pub fn read_ident(&mut self) -> Option<String> {
        if !self.cursor.current().is_some_and(is_ident_start) {
            return None;
        }
        let mut ident = String::new();
        while let Some(c) = self.cursor.current().filter(|&c| is_ident_char(c)) {
            ident.push(c);
            self.cursor.advance();
        }
        Some(ident)
    }

    /// Read a balanced `open … close` group with the cursor on `open`.
    ///
    /// Returns the text between the delimiters and leaves the cursor past
    /// `close`. An unterminated group runs to the end of input.
    pub fn read_group(&mut self, open: char, close: char) -> String {
        let start = self.cursor.pos() + 1;
        let mut strings = StringTracker::new();
        let mut depth = 0usize;

        while let Some(ch) = self.cursor.current() {
            if strings.handle_at(&self.cursor) || strings.in_string() {
                self.cursor.advance();
                continue;
            }
            if self.cursor.at_comment_start() {
                let end = comment_end(&self.cursor);
                self.cursor.set_pos(end);
                continue;
            }
            if ch == open {
                depth += 1;
            } else if ch == close && !(close == '>' && self.cursor.previous() == Some('=')) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let inner = self.cursor.slice(start, self.cursor.pos());
                    self.cursor.advance();
                    return inner;
                }
            }
            self.cursor.advance();
        }
        self.cursor.slice(start, self.cursor.len())
    }

    /// Capture text until `stop` accepts a code character at nesting depth
    /// zero (outside `()`, `[]`, `{}` and `<>`).
    ///
    /// `stop` sees the cursor and the text captured so far. The cursor is
    /// left on the stop character, which is not included in the result.
    /// Comments and strings are copied verbatim and never stop the capture.
    pub fn capture_top_level(&mut self, mut stop: impl FnMut(&Cursor, &str) -> bool) -> String {
        let mut text = String::new();
        let mut strings = StringTracker::new();
        let mut depth: i32 = 0;
        let mut angle: i32 = 0;

        while let Some(ch) = self.cursor.current() {
            if strings.handle_at(&self.cursor) || strings.in_string() {
                text.push(ch);
                self.cursor.advance();
                continue;
            }
            if self.cursor.at_comment_start() {
                let end = comment_end(&self.cursor);
                text.push_str(&self.cursor.slice(self.cursor.pos(), end));
                self.cursor.set_pos(end);
                continue;
            }
            if depth == 0 && angle == 0 && stop(&self.cursor, &text) {
                break;
            }
            match ch {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth -= 1,
                '<' => angle += 1,
                '>' if self.cursor.previous() != Some('=') => angle = (angle - 1).max(0),
                _ => {}
            }
            if depth < 0 {
                // Closer of an enclosing construct
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }
        text
    }

    /// Byte offset of a char index in the walked text.
    pub fn byte_offset(&self, char_pos: usize) -> usize {
        self.cursor.slice(0, char_pos).len()
    }
}

/// The next non-whitespace character at or after the cursor.
pub fn next_code_char(cursor: &Cursor) -> Option<char> {
    (0..)
        .map_while(|i| cursor.peek(i))
        .find(|c| !c.is_whitespace())
}
