//! Properties that hold for every input of a family, checked over tables.

use propsift::base::text::{normalize_comment, normalize_default_value, normalize_type};
use propsift::parser::{PropertyScanOptions, scan_destructuring, scan_properties, split_top_level};
use rstest::rstest;

// =============================================================================
// DESTRUCTURING
// =============================================================================

#[rstest]
#[case(" a, ...rest ")]
#[case(" ...rest, a ")]
#[case(" a = { x: [1, 2] }, ...others, b ")]
#[case(" 'aria-label': aria, ...attrs ")]
#[case(" a, ...{ nested }, b ")]
fn test_rest_items_never_appear(#[case] pattern: &str) {
    let bindings = scan_destructuring(pattern, false);
    assert!(bindings.iter().all(|b| {
        !matches!(b.name.as_str(), "rest" | "others" | "attrs" | "nested")
    }));
    assert!(!bindings.is_empty());
}

#[rstest]
#[case(" c, a, b ", &["c", "a", "b"])]
#[case(" z = 1, y: why = 2, x ", &["z", "y", "x"])]
#[case("\n  first,\n  // comment\n  second = 'x',\n  third\n", &["first", "second", "third"])]
fn test_binding_order_is_source_order(#[case] pattern: &str, #[case] expected: &[&str]) {
    let names: Vec<_> = scan_destructuring(pattern, false)
        .into_iter()
        .map(|b| b.name.to_string())
        .collect();
    assert_eq!(names, expected);
}

#[rstest]
#[case("{ a: { b: { c: [1, (2), { d: 3 }] } } }")]
#[case("[[[]], [{}], ([])]")]
#[case("fn({ x: [a, b] }, (c) => ({ d }))")]
fn test_nested_defaults_are_verbatim(#[case] value: &str) {
    let pattern = format!(" a = {value}, b ");
    let bindings = scan_destructuring(&pattern, false);
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].default_value.as_deref(), Some(value));
}

#[test]
fn test_alias_local_name_is_dropped() {
    let bindings = scan_destructuring(" name: localName ", false);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].name, "name");
    assert_eq!(bindings[0].default_value, None);
}

// =============================================================================
// TYPE BODIES
// =============================================================================

#[rstest]
#[case(" a: string; b?: number; c: boolean; ")]
#[case(" a: string\n b?: number\n c: boolean ")]
#[case(" a: string, b?: number, c: boolean ")]
#[case("\n  /** A */\n  a: string\n  // plain\n  b?: number;\n  c: boolean\n")]
fn test_member_count_is_separator_independent(#[case] body: &str) {
    let entries = scan_properties(body, PropertyScanOptions::default());
    assert_eq!(entries.len(), 3);
    assert!(entries["a"].required());
    assert!(!entries["b"].required());
}

#[test]
fn test_type_body_scenario() {
    let entries = scan_properties(" a: string; b?: number; ", PropertyScanOptions::default());
    assert_eq!(entries["a"].type_text, "string");
    assert!(entries["a"].required());
    assert_eq!(entries["b"].type_text, "number");
    assert!(!entries["b"].required());
}

#[rstest]
#[case("Props<A | B> | Other", &['|'], &["Props<A | B>", "Other"])]
#[case("A & { b: C | D } & E", &['&'], &["A", "{ b: C | D }", "E"])]
#[case("'a|b' | `c&d`", &['|', '&'], &["'a|b'", "`c&d`"])]
#[case("(x: A | B) => void", &['|'], &["(x: A | B) => void"])]
fn test_split_ignores_nested_separators(
    #[case] text: &str,
    #[case] separators: &[char],
    #[case] expected: &[&str],
) {
    assert_eq!(split_top_level(text, separators), expected);
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[rstest]
#[case("{\n  a: string;\n  b: Array< number >;\n}")]
#[case("( x:  number ,\n y: string ) =>  void")]
#[case("Record< string,  'a   b' >")]
fn test_type_normalization_is_idempotent(#[case] text: &str) {
    let once = normalize_type(text);
    assert_eq!(normalize_type(&once), once);
}

#[rstest]
#[case("{\n    a: 1,\n    b: 'x   y'\n}")]
#[case("[\n  1,\n  2\n]")]
fn test_default_normalization_is_idempotent(#[case] text: &str) {
    let once = normalize_default_value(text);
    assert_eq!(normalize_default_value(&once), once);
}

#[test]
fn test_comment_normalization_is_idempotent() {
    let once = normalize_comment("First line\n  second   line\n\nthird");
    assert_eq!(once, "First line second line third");
    assert_eq!(normalize_comment(&once), once);
}
