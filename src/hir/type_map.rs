//! Type map builder: every `interface` and `type` declaration in scope.
//!
//! ```text
//! interface Name<G> extends A, B<C> { body }   → inherits [A, B<C>]
//! type Name<G> = A & B & { body } & C;         → inherits [A, B, C]
//! type Name = A & B;                           → inherits [A, B], no entries
//! type Name = A | B;                           → inherits [A, B], no entries
//! type Name = { body } | { other };            → inherits [{ other }]
//! ```
//!
//! Bodies are handed to the property scanner; declarations sharing a name
//! are merged.

use smol_str::SmolStr;

use crate::base::Cursor;
use crate::parser::walk::next_code_char;
use crate::parser::{CodeWalker, PropertyScanOptions, scan_properties, split_top_level};

use super::types::{TypeDefinition, TypeMap, push_unique};

/// Build the type map from all script fragments, in source order.
pub fn build_type_map(fragments: &[&str], options: PropertyScanOptions) -> TypeMap {
    let mut map = TypeMap::new();
    for fragment in fragments {
        collect_declarations(fragment, options, &mut map);
    }
    map
}

fn collect_declarations(text: &str, options: PropertyScanOptions, map: &mut TypeMap) {
    let mut walker = CodeWalker::new(text);

    while walker.skip_inert().is_some() {
        if !walker.at_word_start() {
            walker.advance();
            continue;
        }

        let resume = walker.pos();
        let declaration = match walker.read_ident().as_deref() {
            Some("interface") => parse_interface(&mut walker, options),
            Some("type") => parse_type_alias(&mut walker, options),
            _ => continue,
        };

        match declaration {
            Some((name, definition)) => {
                tracing::trace!(
                    name = %name,
                    entries = definition.entries.len(),
                    inherits = ?definition.inherits,
                    "found type declaration"
                );
                map.entry(name).or_default().merge(definition);
            }
            None => walker.set_pos(resume + 1),
        }
    }
}

/// `interface Name<G> extends A, B { … }`, with the cursor after `interface`.
fn parse_interface(
    walker: &mut CodeWalker,
    options: PropertyScanOptions,
) -> Option<(SmolStr, TypeDefinition)> {
    let name = read_declared_name(walker)?;

    let mut inherits = Vec::new();
    if walker.at_word("extends") {
        for _ in 0.."extends".len() {
            walker.advance();
        }
        let clause = walker.capture_top_level(|c, _| c.current() == Some('{'));
        for parent in split_top_level(&clause, &[',']) {
            push_unique(&mut inherits, SmolStr::new(parent));
        }
    }

    if walker.current() != Some('{') {
        return None;
    }
    let body = walker.read_group('{', '}');
    Some((
        name,
        TypeDefinition {
            entries: scan_properties(&body, options),
            inherits,
        },
    ))
}

/// `type Name<G> = …`, with the cursor after `type`.
fn parse_type_alias(
    walker: &mut CodeWalker,
    options: PropertyScanOptions,
) -> Option<(SmolStr, TypeDefinition)> {
    let name = read_declared_name(walker)?;
    if walker.current() != Some('=') || walker.cursor().peek(1) == Some('=') {
        return None;
    }
    walker.advance();
    walker.skip_trivia();

    let prefix = walker.capture_top_level(|c, text| match c.current() {
        Some(';') => true,
        Some('{') => opens_object_body(text),
        Some('\n') => ends_statement(c, text),
        _ => false,
    });

    let mut definition = TypeDefinition::default();
    let mut parents = split_top_level(&prefix, &['&', '|']);

    if walker.current() == Some('{') {
        let body = walker.read_group('{', '}');
        definition.entries = scan_properties(&body, options);

        // `{ … } & Parent` or `{ … } | { … }` after the body
        walker.skip_trivia();
        if matches!(walker.current(), Some('&' | '|')) {
            walker.advance();
            let tail = walker.capture_top_level(|c, text| match c.current() {
                Some(';') => true,
                Some('\n') => ends_statement(c, text),
                _ => false,
            });
            parents.extend(split_top_level(&tail, &['&', '|']));
        }
    }

    for parent in parents {
        push_unique(&mut definition.inherits, SmolStr::new(parent));
    }
    Some((name, definition))
}

/// Read `Name` and an optional generic parameter list, skipping trivia after.
fn read_declared_name(walker: &mut CodeWalker) -> Option<SmolStr> {
    walker.skip_trivia();
    let name = walker.read_ident()?;
    walker.skip_trivia();
    if walker.current() == Some('<') {
        walker.read_group('<', '>');
        walker.skip_trivia();
    }
    Some(SmolStr::new(name))
}

/// A top-level `{` is the object body only at the start of the right-hand
/// side or directly after an `&`.
fn opens_object_body(text: &str) -> bool {
    let text = text.trim_end();
    text.is_empty() || text.ends_with('&')
}

/// A newline at depth zero ends the alias unless the expression clearly
/// continues on the next line.
fn ends_statement(cursor: &Cursor, text: &str) -> bool {
    let text = text.trim_end();
    let continues = text.ends_with("=>") || text.ends_with(['&', '|', '=', ',', ':', '?', '.']);
    if text.is_empty() || continues {
        return false;
    }
    !matches!(next_code_char(cursor), Some('&' | '|' | '.' | '?' | ':'))
}
