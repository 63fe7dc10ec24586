//! Locating the intake statement in a script fragment.
//!
//! ```text
//! let { a, b = 1 }: Props = $props();
//!     └pattern─┘   └ann┘   └call─┘
//! ```

use text_size::{TextRange, TextSize};

use crate::parser::CodeWalker;

/// The destructuring assignment that receives a component's props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeStatement {
    /// Text between the pattern's outer braces.
    pub pattern: String,
    /// The `: Annotation` text, or the generic argument of the intake call.
    pub annotation: Option<String>,
    /// Byte range of the statement, from the keyword to the closing `)`.
    pub range: TextRange,
}

const DECLARATION_KEYWORDS: [&str; 3] = ["let", "const", "var"];

/// Find the first `let|const|var { … } [: Annotation] = intake_call[<G>](…)`.
pub fn find_intake(fragment: &str, intake_call: &str) -> Option<IntakeStatement> {
    let mut walker = CodeWalker::new(fragment);

    while walker.skip_inert().is_some() {
        if !walker.at_word_start() {
            walker.advance();
            continue;
        }
        let start = walker.pos();
        let Some(word) = walker.read_ident() else {
            walker.advance();
            continue;
        };
        if !DECLARATION_KEYWORDS.contains(&word.as_str()) {
            continue;
        }

        let after_keyword = walker.pos();
        match parse_intake(&mut walker, intake_call) {
            Some((pattern, annotation)) => {
                let range = TextRange::new(
                    text_size_at(fragment, walker.byte_offset(start)),
                    text_size_at(fragment, walker.byte_offset(walker.pos())),
                );
                return Some(IntakeStatement {
                    pattern,
                    annotation,
                    range,
                });
            }
            None => walker.set_pos(after_keyword),
        }
    }
    None
}

fn parse_intake(walker: &mut CodeWalker, intake_call: &str) -> Option<(String, Option<String>)> {
    walker.skip_trivia();
    if walker.current() != Some('{') {
        return None;
    }
    let pattern = walker.read_group('{', '}');
    walker.skip_trivia();

    let mut annotation = None;
    if walker.current() == Some(':') {
        walker.advance();
        let text = walker.capture_top_level(|c, _| match c.current() {
            Some(';') => true,
            Some('=') => !matches!(c.peek(1), Some('>' | '=')),
            _ => false,
        });
        annotation = non_empty(text);
    }

    if walker.current() != Some('=') {
        return None;
    }
    walker.advance();
    walker.skip_trivia();

    if !walker.at_word(intake_call) {
        return None;
    }
    for _ in intake_call.chars() {
        walker.advance();
    }
    walker.skip_trivia();

    if walker.current() == Some('<') {
        let generic = walker.read_group('<', '>');
        annotation = annotation.or_else(|| non_empty(generic));
        walker.skip_trivia();
    }
    if walker.current() != Some('(') {
        return None;
    }
    walker.read_group('(', ')');
    Some((pattern, annotation))
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn text_size_at(text: &str, byte_offset: usize) -> TextSize {
    TextSize::of(&text[..byte_offset])
}
