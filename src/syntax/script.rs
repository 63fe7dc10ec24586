//! `<script>` block extraction from a component file.
//!
//! Only the tags themselves are recognized. Markup between blocks is
//! skipped, as are HTML comments, so a commented-out block is never
//! returned.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// One `<script …>…</script>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock<'a> {
    /// Text between the opening and closing tags.
    pub content: &'a str,
    /// Value of the `lang` attribute, if any.
    pub lang: Option<SmolStr>,
    /// `context="module"` or a bare `module` attribute.
    pub is_module: bool,
    /// Byte range of `content` in the component source.
    pub range: TextRange,
}

impl ScriptBlock<'_> {
    pub fn is_typescript(&self) -> bool {
        self.lang.as_deref().is_some_and(|lang| {
            lang.eq_ignore_ascii_case("ts") || lang.eq_ignore_ascii_case("typescript")
        })
    }
}

const OPEN_TAG: &str = "<script";
const CLOSE_TAG: &str = "</script";

/// Every script block of `source`, in source order.
///
/// A block without a closing tag runs to the end of input; self-closing
/// tags yield nothing.
pub fn extract_script_blocks(source: &str) -> Vec<ScriptBlock<'_>> {
    let bytes = source.as_bytes();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos..].starts_with(b"<!--") {
            pos = find_from(source, pos + 4, "-->").map_or(source.len(), |end| end + 3);
            continue;
        }
        if !starts_with_tag(source, pos, OPEN_TAG) {
            pos += 1;
            continue;
        }

        let Some(tag_end) = find_tag_end(bytes, pos + OPEN_TAG.len()) else {
            break;
        };
        let attributes = parse_attributes(&source[pos + OPEN_TAG.len()..tag_end]);
        let self_closing = bytes[tag_end - 1] == b'/';
        pos = tag_end + 1;
        if self_closing {
            continue;
        }

        let content_start = pos;
        let content_end = find_close_tag(source, content_start).unwrap_or(source.len());
        blocks.push(ScriptBlock {
            content: &source[content_start..content_end],
            lang: attribute(&attributes, "lang").flatten().map(SmolStr::new),
            is_module: is_module(&attributes),
            range: TextRange::new(
                TextSize::new(content_start as u32),
                TextSize::new(content_end as u32),
            ),
        });

        pos = match find_tag_end(bytes, content_end) {
            Some(end) if content_end < source.len() => end + 1,
            _ => source.len(),
        };
    }

    tracing::trace!(blocks = blocks.len(), "extracted script blocks");
    blocks
}

/// A tag name match must be followed by whitespace, `>` or `/`.
fn starts_with_tag(source: &str, pos: usize, tag: &str) -> bool {
    let Some(candidate) = source.get(pos..pos + tag.len()) else {
        return false;
    };
    candidate.eq_ignore_ascii_case(tag)
        && source
            .as_bytes()
            .get(pos + tag.len())
            .is_some_and(|&b| b.is_ascii_whitespace() || b == b'>' || b == b'/')
}

fn find_close_tag(source: &str, from: usize) -> Option<usize> {
    (from..source.len()).find(|&pos| starts_with_tag(source, pos, CLOSE_TAG))
}

fn find_from(source: &str, from: usize, needle: &str) -> Option<usize> {
    source.get(from..)?.find(needle).map(|offset| from + offset)
}

/// Index of the `>` ending a tag, skipping quoted attribute values.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote = None;
    for (offset, &b) in bytes.get(from..)?.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(from + offset),
            None => {}
        }
    }
    None
}

type Attributes<'a> = Vec<(&'a str, Option<&'a str>)>;

fn parse_attributes(text: &str) -> Attributes<'_> {
    let mut attributes = Vec::new();
    let mut rest = text.trim_end_matches('/');

    loop {
        rest = rest.trim_start();
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        if name_len == 0 {
            match rest.chars().next() {
                Some(c) => {
                    rest = &rest[c.len_utf8()..];
                    continue;
                }
                None => break,
            }
        }
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after) => {
                let (value, remaining) = split_value(after.trim_start());
                rest = remaining;
                Some(value)
            }
            None => None,
        };
        attributes.push((name, value));
    }
    attributes
}

/// Split an attribute value (quoted or bare) from the rest of the tag.
fn split_value(text: &str) -> (&str, &str) {
    match text.chars().next() {
        Some(q @ ('"' | '\'')) => {
            let body = &text[1..];
            match body.find(q) {
                Some(end) => (&body[..end], &body[end + 1..]),
                None => (body, ""),
            }
        }
        _ => {
            let end = text.find(char::is_whitespace).unwrap_or(text.len());
            (&text[..end], &text[end..])
        }
    }
}

fn attribute<'a>(attributes: &Attributes<'a>, name: &str) -> Option<Option<&'a str>> {
    attributes
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

fn is_module(attributes: &Attributes<'_>) -> bool {
    match attribute(attributes, "context") {
        Some(Some(context)) if context == "module" => true,
        _ => matches!(attribute(attributes, "module"), Some(None)),
    }
}
