//! Props extraction from complete component files.

use propsift::hir::{build_type_map, find_intake};
use propsift::parser::PropertyScanOptions;
use propsift::syntax::extract_script_blocks;
use propsift::{ExtractOptions, UNKNOWN_TYPE, extract_component_props, extract_props};

use crate::helpers::component_fixtures::*;
use crate::helpers::props_assertions::*;

fn extract(source: &str) -> propsift::ExtractionResult {
    extract_component_props(source, &ExtractOptions::default())
}

// =============================================================================
// TYPED COMPONENTS
// =============================================================================

#[test]
fn test_interface_in_module_script() {
    let result = extract(BUTTON);

    assert_eq!(prop_names(&result), vec!["variant", "loading", "label"]);
    assert_prop(&result, "variant", "Variant", false, Some("'primary'"));
    assert_prop(&result, "loading", "boolean", false, Some("false"));
    assert_prop(&result, "label", "string", true, None);
    assert_eq!(result.inherits, vec!["HTMLButtonAttributes"]);
}

#[test]
fn test_doc_comments_are_carried_over() {
    let result = extract(BUTTON);

    assert_eq!(
        get_prop(&result, "variant").comment.as_deref(),
        Some("Visual style of the button.")
    );
    assert_eq!(
        get_prop(&result, "loading").comment.as_deref(),
        Some("Show a spinner and\ndisable the button.")
    );
    assert_eq!(get_prop(&result, "label").comment, None);
}

#[test]
fn test_rest_binding_never_appears() {
    let result = extract(BUTTON);
    assert!(result.get("rest").is_none());
}

#[test]
fn test_intersection_with_local_parent() {
    let result = extract(DIALOG);

    assert_eq!(prop_names(&result), vec!["title", "onclose", "open", "children"]);
    assert_prop(&result, "title", "string", true, None);
    assert_prop(&result, "onclose", "() => void", false, None);
    assert_prop(&result, "children", "Snippet", false, None);
    assert!(result.inherits.is_empty());

    let open = get_prop(&result, "open");
    assert!(open.bindable);
    assert_eq!(open.default_value.as_deref(), Some("false"));
    assert_eq!(open.type_text, "boolean");
}

#[test]
fn test_inline_annotation_and_alias() {
    let result = extract(INLINE_ANNOTATION);

    assert_eq!(prop_names(&result), vec!["href", "external", "class"]);
    assert_prop(&result, "href", "string", true, None);
    assert_prop(&result, "external", "boolean", false, Some("false"));
    assert_prop(&result, "class", "string", false, Some("''"));
    assert!(result.get("className").is_none());
    assert_eq!(result.inherits, vec!["Record<`data-${string}`, string>"]);
}

// =============================================================================
// UNTYPED AND EMPTY COMPONENTS
// =============================================================================

#[test]
fn test_untyped_component_falls_back_to_unknown() {
    let result = extract(UNTYPED);

    assert_eq!(prop_names(&result), vec!["items", "selected", "format"]);
    for prop in &result.props {
        assert_eq!(prop.type_text, UNKNOWN_TYPE);
        assert!(!prop.required);
    }
    assert!(get_prop(&result, "selected").bindable);
    assert_eq!(get_prop(&result, "selected").default_value.as_deref(), Some("null"));
}

#[test]
fn test_multiline_default_is_dedented() {
    let result = extract(UNTYPED);
    assert_eq!(
        get_prop(&result, "format").default_value.as_deref(),
        Some("(item) => {\n    return String(item);\n}")
    );
}

#[test]
fn test_component_without_props() {
    let result = extract(STATIC);
    assert!(result.props.is_empty());
    assert!(result.inherits.is_empty());
}

// =============================================================================
// BUILDING BLOCKS ON REAL COMPONENTS
// =============================================================================

#[test]
fn test_script_blocks_feed_the_type_map() {
    let blocks = extract_script_blocks(BUTTON);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].is_module);

    let fragments: Vec<&str> = blocks.iter().map(|b| b.content).collect();
    let map = build_type_map(&fragments, PropertyScanOptions::default());
    assert!(map.contains_key("ButtonProps"));
    assert_eq!(map["ButtonProps"].inherits, vec!["HTMLButtonAttributes"]);
    assert_eq!(map["ButtonProps"].entries.len(), 3);

    assert!(find_intake(blocks[0].content, "$props").is_none());
    let intake = find_intake(blocks[1].content, "$props").unwrap();
    assert_eq!(intake.annotation.as_deref(), Some("ButtonProps"));
}

#[test]
fn test_fragments_can_be_passed_directly() {
    let module = "export interface Props { size: number }";
    let instance = "let { size = 1 }: Props = $props();";
    let result = extract_props(&[module, instance], &ExtractOptions::default());
    assert_prop(&result, "size", "number", true, Some("1"));
}

#[test]
fn test_serialized_result_shape() {
    let result = extract(DIALOG);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["props"][2]["name"], "open");
    assert_eq!(json["props"][2]["type"], "boolean");
    assert_eq!(json["props"][2]["bindable"], true);
    assert_eq!(json["props"][2]["defaultValue"], "false");
    assert!(json["props"][0].get("defaultValue").is_none());
    assert_eq!(json["inherits"], serde_json::json!([]));
}
