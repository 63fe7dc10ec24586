//! Extraction options applied to whole components.

use propsift::hir::ExtractOptions;
use propsift::{UNKNOWN_TYPE, extract_component_props};
use rstest::rstest;

use crate::helpers::component_fixtures::*;
use crate::helpers::props_assertions::*;

#[test]
fn test_fallback_types_fill_unknown_only() {
    let options = ExtractOptions::default()
        .with_fallback_type("items", "unknown[]")
        .with_fallback_type("label", "number");

    let untyped = extract_component_props(UNTYPED, &options);
    assert_eq!(get_prop(&untyped, "items").type_text, "unknown[]");
    assert_eq!(get_prop(&untyped, "selected").type_text, UNKNOWN_TYPE);

    let typed = extract_component_props(BUTTON, &options);
    assert_eq!(get_prop(&typed, "label").type_text, "string");
}

#[test]
fn test_normalized_options() {
    let result = extract_component_props(BUTTON, &ExtractOptions::normalized());
    assert_eq!(
        get_prop(&result, "loading").comment.as_deref(),
        Some("Show a spinner and disable the button.")
    );

    let untyped = extract_component_props(UNTYPED, &ExtractOptions::normalized());
    assert_eq!(
        get_prop(&untyped, "format").default_value.as_deref(),
        Some("(item) => { return String(item); }")
    );
}

const NESTED: &str = "<script lang=\"ts\">
  interface Props {
    label: string;
    config: {
      a: string;
      b: number;
    };
  }
  let { label, config }: Props = $props();
</script>";

#[rstest]
#[case("{}", "{\n  a: string;\n  b: number;\n}")]
#[case(r#"{ "normalizeType": true }"#, "{ a: string; b: number; }")]
fn test_options_from_settings_json(#[case] json: &str, #[case] expected_config: &str) {
    let options = ExtractOptions::from_json(json).unwrap();
    let result = extract_component_props(NESTED, &options);

    assert_eq!(get_prop(&result, "label").type_text, "string");
    assert_eq!(get_prop(&result, "config").type_text, expected_config);
}

#[test]
fn test_custom_rune_names() {
    let source = "<script>let { value = model('') } = defineProps();</script>";
    let options = ExtractOptions {
        intake_call: "defineProps".into(),
        bindable_marker: "model".into(),
        ..ExtractOptions::default()
    };
    let result = extract_component_props(source, &options);
    let value = get_prop(&result, "value");
    assert!(value.bindable);
    assert_eq!(value.default_value.as_deref(), Some("''"));

    assert!(extract_component_props(source, &ExtractOptions::default()).is_empty());
}
