//! Destructuring scanner: `{ a, b = 1, c: local = [], ...rest }` → bindings.
//!
//! The input is the text between the pattern's outer braces. Each top-level
//! item yields one [`DestructuredBinding`] carrying the consumer-visible name
//! and the verbatim default value, if any.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::text::{dedent, normalize_default_value};
use crate::base::{Cursor, StringTracker, is_ident_char, is_quote};
use crate::parser::split::comment_end;

/// One item of the intake destructuring pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructuredBinding {
    /// External (consumer-visible) name, even when the source used an alias.
    pub name: SmolStr,
    /// Verbatim default value, trimmed and dedented.
    pub default_value: Option<String>,
}

/// What the scanner is doing with the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Collecting the property name.
    Name,
    /// After `:`; skipping the local alias (or nested pattern).
    Alias,
    /// After a leading `...`; the whole item is dropped.
    Rest,
    /// After `=`; collecting the default value verbatim.
    Value,
}

#[derive(Debug, Default, Clone, Copy)]
struct Depths {
    paren: u32,
    bracket: u32,
    brace: u32,
}

impl Depths {
    fn is_top(&self) -> bool {
        self.paren == 0 && self.bracket == 0 && self.brace == 0
    }

    fn track(&mut self, ch: char) {
        match ch {
            '(' => self.paren += 1,
            ')' => self.paren = self.paren.saturating_sub(1),
            '[' => self.bracket += 1,
            ']' => self.bracket = self.bracket.saturating_sub(1),
            '{' => self.brace += 1,
            '}' => self.brace = self.brace.saturating_sub(1),
            _ => {}
        }
    }
}

struct DestructureScanner {
    cursor: Cursor,
    strings: StringTracker,
    mode: Mode,
    depths: Depths,
    name: String,
    value: String,
    normalize: bool,
    bindings: IndexMap<SmolStr, Option<String>>,
}

/// Scan the body of a destructuring pattern into ordered bindings.
///
/// Rest items never appear in the output. A name that occurs twice keeps
/// its first position and takes the last default value.
pub fn scan_destructuring(body: &str, normalize_default: bool) -> Vec<DestructuredBinding> {
    let scanner = DestructureScanner {
        cursor: Cursor::new(body),
        strings: StringTracker::new(),
        mode: Mode::Name,
        depths: Depths::default(),
        name: String::new(),
        value: String::new(),
        normalize: normalize_default,
        bindings: IndexMap::new(),
    };
    scanner.run()
}

impl DestructureScanner {
    fn run(mut self) -> Vec<DestructuredBinding> {
        while let Some(ch) = self.cursor.current() {
            match self.mode {
                Mode::Name => self.handle_name(ch),
                Mode::Alias => self.handle_alias(ch),
                Mode::Rest => self.handle_rest(ch),
                Mode::Value => self.handle_value(ch),
            }
        }
        self.finalize();

        self.bindings
            .into_iter()
            .map(|(name, default_value)| DestructuredBinding {
                name,
                default_value,
            })
            .collect()
    }

    fn handle_name(&mut self, ch: char) {
        if self.cursor.at_comment_start() {
            self.skip_comment();
            return;
        }
        if is_quote(ch) && self.name.is_empty() {
            self.read_quoted_name(ch);
            return;
        }
        match ch {
            '.' if self.name.is_empty() && self.cursor.starts_with("...") => {
                self.mode = Mode::Rest;
                self.cursor.advance_by(3);
                return;
            }
            c if is_ident_char(c) => self.name.push(c),
            ':' if !self.name.is_empty() => self.mode = Mode::Alias,
            '=' if !self.name.is_empty() => self.mode = Mode::Value,
            ',' => self.finalize(),
            _ => {}
        }
        self.cursor.advance();
    }

    /// Read a quoted key such as `'aria-label'` into the name buffer.
    fn read_quoted_name(&mut self, quote: char) {
        self.cursor.advance();
        while let Some(c) = self.cursor.current() {
            if c == quote && !self.cursor.is_escaped() {
                self.cursor.advance();
                return;
            }
            self.name.push(c);
            self.cursor.advance();
        }
    }

    /// Skip the local name (or nested pattern) after `:`.
    fn handle_alias(&mut self, ch: char) {
        if self.skip_inert() {
            return;
        }
        match ch {
            '=' if self.depths.is_top() => self.mode = Mode::Value,
            ',' if self.depths.is_top() => self.finalize(),
            c => self.depths.track(c),
        }
        self.cursor.advance();
    }

    fn handle_rest(&mut self, ch: char) {
        if self.skip_inert() {
            return;
        }
        match ch {
            ',' if self.depths.is_top() => self.finalize(),
            c => self.depths.track(c),
        }
        self.cursor.advance();
    }

    fn handle_value(&mut self, ch: char) {
        if self.strings.handle_at(&self.cursor) || self.strings.in_string() {
            self.value.push(ch);
            self.cursor.advance();
            return;
        }
        if self.cursor.at_comment_start() {
            let start = self.cursor.pos();
            self.skip_comment();
            // Comments nested inside the value are part of it
            if !self.depths.is_top() {
                let text = self.cursor.slice(start, self.cursor.pos());
                self.value.push_str(&text);
            }
            return;
        }
        if ch == ',' && self.depths.is_top() {
            self.finalize();
            self.cursor.advance();
            return;
        }
        self.depths.track(ch);
        self.value.push(ch);
        self.cursor.advance();
    }

    /// Step over string literals and comments in modes that discard text.
    ///
    /// Returns `true` if the cursor was moved.
    fn skip_inert(&mut self) -> bool {
        if self.strings.handle_at(&self.cursor) || self.strings.in_string() {
            self.cursor.advance();
            return true;
        }
        if self.cursor.at_comment_start() {
            self.skip_comment();
            return true;
        }
        false
    }

    fn skip_comment(&mut self) {
        let end = comment_end(&self.cursor);
        self.cursor.set_pos(end);
    }

    fn finalize(&mut self) {
        if self.mode != Mode::Rest && !self.name.is_empty() {
            let value = dedent(&self.value);
            let value = if self.normalize {
                normalize_default_value(&value)
            } else {
                value
            };
            let default_value = (!value.is_empty()).then_some(value);
            self.bindings.insert(SmolStr::new(&self.name), default_value);
        }

        self.name.clear();
        self.value.clear();
        self.mode = Mode::Name;
        self.depths = Depths::default();
        self.strings = StringTracker::new();
    }
}
