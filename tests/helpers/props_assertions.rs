//! Assertion helpers for extraction results.

use propsift::{ExtractionResult, PropertyRecord};

/// Names of all props in order.
pub fn prop_names(result: &ExtractionResult) -> Vec<&str> {
    result.props.iter().map(|p| p.name.as_str()).collect()
}

/// Get a prop by name, panicking with the full result if missing.
pub fn get_prop<'a>(result: &'a ExtractionResult, name: &str) -> &'a PropertyRecord {
    result
        .get(name)
        .unwrap_or_else(|| panic!("Expected prop '{name}', got {:?}", prop_names(result)))
}

/// Assert type, required flag and default value of one prop.
pub fn assert_prop(
    result: &ExtractionResult,
    name: &str,
    type_text: &str,
    required: bool,
    default_value: Option<&str>,
) {
    let prop = get_prop(result, name);
    assert_eq!(prop.type_text, type_text, "type of '{name}'");
    assert_eq!(prop.required, required, "required flag of '{name}'");
    assert_eq!(
        prop.default_value.as_deref(),
        default_value,
        "default value of '{name}'"
    );
}
