//! Property scanner: type/interface body → ordered property declarations.
//!
//! A context-tagged state machine. One [`ScanState`] drives dispatch and each
//! state has its own handler, so the rule for which characters are inert in
//! a context lives in exactly one place:
//!
//! ```text
//! Seeking ──ident──▶ PropertyName ──?──▶ AfterOptionalMarker ──:──┐
//!    │                   └──────────────:────────────────────────▶ AfterColon ──▶ PropertyType
//!    ├── // ──▶ LineComment                                                          │
//!    ├── /* ──▶ BlockComment                                  ; , comment, closer, ──┘
//!    └── /** ─▶ DocComment (pending comment for the next property)  next property
//! ```
//!
//! Bracket depth and string-literal state are scanner-wide. Handlers that
//! hand a character to another state return without advancing, so the next
//! state sees it.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::text::{clean_doc_comment, dedent, normalize_comment, normalize_type};
use crate::base::{Cursor, StringTracker, is_ident_char, is_ident_start, is_quote};

/// Upper bound on how far the next-property heuristic looks ahead.
const MAX_LOOKAHEAD: usize = 128;

/// One member of a type or interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub name: SmolStr,
    /// Type text, trimmed and dedented (normalized if requested).
    pub type_text: String,
    pub optional: bool,
    /// The doc comment written immediately before the member.
    pub comment: Option<String>,
}

impl PropertyDeclaration {
    pub fn required(&self) -> bool {
        !self.optional
    }
}

/// Normalization flags for [`scan_properties`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyScanOptions {
    pub normalize_type: bool,
    pub normalize_comment: bool,
}

/// Scanner context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Seeking,
    LineComment,
    BlockComment,
    DocComment,
    PropertyName,
    AfterOptionalMarker,
    AfterColon,
    PropertyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NestedComment {
    Line,
    Block,
}

struct PropertyScanner {
    cursor: Cursor,
    state: ScanState,
    options: PropertyScanOptions,
    strings: StringTracker,
    depth: i32,
    angle: i32,
    /// Depth-0 `?` of a conditional type still waiting for its `:`.
    open_conditionals: usize,
    name: String,
    name_ended: bool,
    optional: bool,
    method: bool,
    type_buf: String,
    type_comment: Option<NestedComment>,
    comment_buf: String,
    pending_comment: Option<String>,
    entries: IndexMap<SmolStr, PropertyDeclaration>,
}

/// Scan a type/interface body (without its outer braces) into declarations.
///
/// Later declarations of the same name overwrite earlier ones.
pub fn scan_properties(
    body: &str,
    options: PropertyScanOptions,
) -> IndexMap<SmolStr, PropertyDeclaration> {
    let scanner = PropertyScanner {
        cursor: Cursor::new(body),
        state: ScanState::Seeking,
        options,
        strings: StringTracker::new(),
        depth: 0,
        angle: 0,
        open_conditionals: 0,
        name: String::new(),
        name_ended: false,
        optional: false,
        method: false,
        type_buf: String::new(),
        type_comment: None,
        comment_buf: String::new(),
        pending_comment: None,
        entries: IndexMap::new(),
    };
    scanner.run()
}

impl PropertyScanner {
    fn run(mut self) -> IndexMap<SmolStr, PropertyDeclaration> {
        while let Some(ch) = self.cursor.current() {
            match self.state {
                ScanState::Seeking => self.seeking(ch),
                ScanState::LineComment => self.line_comment(ch),
                ScanState::BlockComment => self.block_comment(),
                ScanState::DocComment => self.doc_comment(ch),
                ScanState::PropertyName => self.property_name(ch),
                ScanState::AfterOptionalMarker => self.after_optional_marker(ch),
                ScanState::AfterColon => self.after_colon(ch),
                ScanState::PropertyType => self.property_type(ch),
            }
        }
        if self.state == ScanState::PropertyType {
            self.finalize();
        }
        self.entries
    }

    // ------------------------------------------------------------------
    // Comment states: everything is inert except the terminator
    // ------------------------------------------------------------------

    fn line_comment(&mut self, ch: char) {
        if ch == '\n' {
            self.state = ScanState::Seeking;
        }
        self.cursor.advance();
    }

    fn block_comment(&mut self) {
        if self.cursor.starts_with("*/") {
            self.state = ScanState::Seeking;
            self.cursor.advance_by(2);
        } else {
            self.cursor.advance();
        }
    }

    fn doc_comment(&mut self, ch: char) {
        if self.cursor.starts_with("*/") {
            let cleaned = clean_doc_comment(&self.comment_buf);
            let cleaned = if self.options.normalize_comment {
                normalize_comment(&cleaned)
            } else {
                cleaned
            };
            self.pending_comment = (!cleaned.is_empty()).then_some(cleaned);
            self.comment_buf.clear();
            self.state = ScanState::Seeking;
            self.cursor.advance_by(2);
        } else {
            self.comment_buf.push(ch);
            self.cursor.advance();
        }
    }

    // ------------------------------------------------------------------
    // Member states
    // ------------------------------------------------------------------

    fn seeking(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.cursor.advance();
        } else if self.cursor.starts_with("/**") && self.cursor.peek(3) != Some('/') {
            self.comment_buf.clear();
            self.state = ScanState::DocComment;
            self.cursor.advance_by(3);
        } else if self.cursor.starts_with("/*") {
            self.state = ScanState::BlockComment;
            self.cursor.advance_by(2);
        } else if self.cursor.starts_with("//") {
            self.state = ScanState::LineComment;
            self.cursor.advance_by(2);
        } else if is_ident_start(ch) {
            self.start_name();
            self.name.push(ch);
            self.cursor.advance();
        } else if is_quote(ch) {
            self.start_name();
            self.read_quoted_name(ch);
            self.name_ended = true;
        } else if matches!(ch, '[' | '(' | '<') {
            // Index, call and construct signatures; dropped on finalize
            self.start_name();
            self.read_balanced(ch);
            self.name_ended = true;
        } else {
            self.cursor.advance();
        }
    }

    fn property_name(&mut self, ch: char) {
        match ch {
            c if is_ident_char(c) => {
                if self.name_ended {
                    // A modifier such as `readonly` preceded the real name
                    self.name.clear();
                    self.name_ended = false;
                }
                self.name.push(c);
                self.cursor.advance();
            }
            c if c.is_whitespace() => {
                self.name_ended = true;
                self.cursor.advance();
            }
            '?' if matches!(self.next_significant(1), Some(':' | '(' | '<')) => {
                self.optional = true;
                self.state = ScanState::AfterOptionalMarker;
                self.cursor.advance();
            }
            ':' => {
                self.state = ScanState::AfterColon;
                self.cursor.advance();
            }
            '(' | '<' => self.begin_method(),
            _ => self.abort(),
        }
    }

    fn after_optional_marker(&mut self, ch: char) {
        match ch {
            c if c.is_whitespace() => self.cursor.advance(),
            ':' => {
                self.state = ScanState::AfterColon;
                self.cursor.advance();
            }
            '(' | '<' => self.begin_method(),
            _ => self.abort(),
        }
    }

    fn after_colon(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.cursor.advance();
        } else {
            self.begin_type();
        }
    }

    fn property_type(&mut self, ch: char) {
        if let Some(kind) = self.type_comment {
            self.nested_comment(kind, ch);
            return;
        }
        if !self.strings.in_string()
            && self.depth == 0
            && self.open_conditionals == 0
            && self.after_whitespace()
            && self.looks_like_property_start(ch)
        {
            // Missing terminator: the next member starts here
            self.end_property();
            return;
        }
        if self.strings.handle_at(&self.cursor) || self.strings.in_string() {
            self.push_type(ch);
            return;
        }
        if self.cursor.at_comment_start() {
            if self.depth == 0 {
                // The comment documents the next member
                self.end_property();
            } else {
                self.type_comment = Some(match self.cursor.peek(1) {
                    Some('/') => NestedComment::Line,
                    _ => NestedComment::Block,
                });
                self.push_type('/');
                self.push_type_peeked();
            }
            return;
        }

        match ch {
            '{' | '[' | '(' => {
                self.depth += 1;
                self.push_type(ch);
            }
            '}' | ']' | ')' => {
                self.depth -= 1;
                if self.depth < 0 {
                    // Closer of the enclosing body: leave it for `Seeking`
                    self.depth = 0;
                    self.end_property();
                } else {
                    self.push_type(ch);
                }
            }
            '<' => {
                self.angle += 1;
                self.push_type(ch);
            }
            '>' => {
                if self.cursor.previous() != Some('=') {
                    self.angle = (self.angle - 1).max(0);
                }
                self.push_type(ch);
            }
            '?' if self.depth == 0 => {
                self.open_conditionals += 1;
                self.push_type(ch);
            }
            ':' if self.depth == 0 => {
                self.open_conditionals = self.open_conditionals.saturating_sub(1);
                self.push_type(ch);
            }
            ';' if self.depth == 0 => {
                self.end_property();
                self.cursor.advance();
            }
            ',' if self.depth == 0 && self.angle == 0 => {
                self.end_property();
                self.cursor.advance();
            }
            _ => self.push_type(ch),
        }
    }

    fn nested_comment(&mut self, kind: NestedComment, ch: char) {
        match kind {
            NestedComment::Line if ch == '\n' => self.type_comment = None,
            NestedComment::Block if self.cursor.starts_with("*/") => {
                self.push_type('*');
                self.type_comment = None;
                self.push_type_peeked();
                return;
            }
            _ => {}
        }
        self.push_type(ch);
    }

    // ------------------------------------------------------------------
    // Transitions and buffers
    // ------------------------------------------------------------------

    fn start_name(&mut self) {
        self.name.clear();
        self.name_ended = false;
        self.optional = false;
        self.method = false;
        self.state = ScanState::PropertyName;
    }

    fn begin_type(&mut self) {
        self.type_buf.clear();
        self.depth = 0;
        self.angle = 0;
        self.open_conditionals = 0;
        self.strings = StringTracker::new();
        self.type_comment = None;
        self.state = ScanState::PropertyType;
    }

    /// `name(args): Ret` and `name<T>(args): Ret`; the signature becomes the type.
    fn begin_method(&mut self) {
        self.begin_type();
        self.method = true;
    }

    fn abort(&mut self) {
        self.name.clear();
        self.optional = false;
        self.method = false;
        self.pending_comment = None;
        self.state = ScanState::Seeking;
    }

    fn end_property(&mut self) {
        self.finalize();
        self.state = ScanState::Seeking;
    }

    /// Push the character under the cursor into the type buffer and advance.
    fn push_type(&mut self, ch: char) {
        self.type_buf.push(ch);
        self.cursor.advance();
    }

    fn push_type_peeked(&mut self) {
        if let Some(next) = self.cursor.current() {
            self.push_type(next);
        }
    }

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

    /// Read a balanced `open … close` group (string-aware) into the name buffer.
    fn read_balanced(&mut self, open: char) {
        let close = match open {
            '[' => ']',
            '(' => ')',
            _ => '>',
        };
        let mut strings = StringTracker::new();
        let mut depth = 0usize;
        while let Some(c) = self.cursor.current() {
            let in_string = strings.handle_at(&self.cursor) || strings.in_string();
            self.name.push(c);
            self.cursor.advance();
            if in_string {
                continue;
            }
            if c == open {
                depth += 1;
            } else if c == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Next non-whitespace character at or after `offset` from the cursor.
    fn next_significant(&self, offset: usize) -> Option<char> {
        (offset..offset + MAX_LOOKAHEAD)
            .map_while(|i| self.cursor.peek(i))
            .find(|c| !c.is_whitespace())
    }

    /// The type text so far is non-empty and ends in whitespace.
    fn after_whitespace(&self) -> bool {
        self.type_buf.ends_with(char::is_whitespace) && !self.type_buf.trim().is_empty()
    }

    /// Bounded lookahead for `[readonly] name [?] :` starting at the cursor.
    fn looks_like_property_start(&self, first: char) -> bool {
        if !is_ident_start(first) && !is_quote(first) {
            return false;
        }
        let mut i = self.skip_word(0);
        let word = self.cursor.slice(self.cursor.pos(), self.cursor.pos() + i);
        if word == "readonly" {
            i = self.skip_spaces(i);
            match self.cursor.peek(i) {
                Some(c) if is_ident_start(c) => i = self.skip_word(i),
                _ => return false,
            }
        }
        i = self.skip_spaces(i);
        if self.cursor.peek(i) == Some('?') {
            i = self.skip_spaces(i + 1);
        }
        i < MAX_LOOKAHEAD && self.cursor.peek(i) == Some(':')
    }

    /// Skip an identifier or quoted key starting at `offset`.
    fn skip_word(&self, offset: usize) -> usize {
        let mut i = offset;
        match self.cursor.peek(i) {
            Some(q) if is_quote(q) => {
                i += 1;
                while let Some(c) = self.cursor.peek(i) {
                    i += 1;
                    if c == q || i - offset >= MAX_LOOKAHEAD {
                        break;
                    }
                }
            }
            _ => {
                while self.cursor.peek(i).is_some_and(is_ident_char) && i - offset < MAX_LOOKAHEAD {
                    i += 1;
                }
            }
        }
        i
    }

    fn skip_spaces(&self, offset: usize) -> usize {
        let mut i = offset;
        while self.cursor.peek(i).is_some_and(|c| c == ' ' || c == '\t') && i < MAX_LOOKAHEAD {
            i += 1;
        }
        i
    }

    fn finalize(&mut self) {
        let name = std::mem::take(&mut self.name);
        let raw = std::mem::take(&mut self.type_buf);
        let optional = std::mem::take(&mut self.optional);
        let method = std::mem::take(&mut self.method);
        let comment = self.pending_comment.take();
        self.type_comment = None;
        self.depth = 0;
        self.angle = 0;
        self.open_conditionals = 0;

        if name.is_empty() {
            return;
        }
        if name.starts_with(['[', '(', '<']) {
            tracing::trace!(signature = %name, "skipping signature member");
            return;
        }

        let mut text = dedent(&raw);
        if let Some(rest) = text.strip_prefix(['|', '&']) {
            text = dedent(rest);
        }
        if method {
            text = method_type(&text);
        }
        if self.options.normalize_type {
            text = normalize_type(&text);
        }
        if text.is_empty() {
            return;
        }

        let name = SmolStr::new(name);
        self.entries.insert(
            name.clone(),
            PropertyDeclaration {
                name,
                type_text: text,
                optional,
                comment,
            },
        );
    }
}

/// Turn a method signature `<T>(a: T): R` into the function type `<T>(a: T) => R`.
fn method_type(signature: &str) -> String {
    let mut cursor = Cursor::new(signature);
    let mut strings = StringTracker::new();
    let mut depth = 0usize;
    let mut close = None;

    while let Some(ch) = cursor.current() {
        if !(strings.handle_at(&cursor) || strings.in_string()) {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        close = Some(cursor.pos());
                        break;
                    }
                }
                _ => {}
            }
        }
        cursor.advance();
    }

    let Some(close) = close else {
        return signature.to_string();
    };
    let params = cursor.slice(0, close + 1);
    let rest = cursor.slice(close + 1, cursor.len());
    let rest = rest.trim();
    match rest.strip_prefix(':') {
        Some(ret) => format!("{} => {}", params.trim_end(), ret.trim()),
        None if rest.is_empty() => format!("{} => any", params.trim_end()),
        None => signature.to_string(),
    }
}
