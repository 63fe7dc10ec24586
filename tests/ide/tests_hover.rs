//! Hover rendering for real components.

use propsift::ide::{props_signature, render_props_markdown};
use propsift::{ExtractOptions, extract_component_props};

use crate::helpers::component_fixtures::*;

// =============================================================================
// HOVER MARKDOWN
// =============================================================================

#[test]
fn test_hover_lists_every_prop() {
    let result = extract_component_props(BUTTON, &ExtractOptions::default());
    let markdown = render_props_markdown("Button", &result);

    assert!(markdown.contains("<Button\n"), "Got: {markdown}");
    assert!(markdown.contains("  variant?: Variant = 'primary'\n"));
    assert!(markdown.contains("  loading?: boolean = false\n"));
    assert!(markdown.contains("  label: string\n"));
    assert!(markdown.contains("**Extends:** `HTMLButtonAttributes`"));
}

#[test]
fn test_hover_joins_multiline_doc_comments() {
    let result = extract_component_props(BUTTON, &ExtractOptions::default());
    let markdown = render_props_markdown("Button", &result);
    assert!(markdown.contains("- `loading`: Show a spinner and disable the button.\n"));
}

#[test]
fn test_hover_marks_bindable_props() {
    let result = extract_component_props(DIALOG, &ExtractOptions::default());
    let markdown = render_props_markdown("Dialog", &result);
    assert!(markdown.contains("  bind:open?: boolean = false\n"));
    assert!(!markdown.contains("**Extends:**"));
}

#[test]
fn test_hover_for_component_without_props() {
    let result = extract_component_props(STATIC, &ExtractOptions::default());
    assert_eq!(
        render_props_markdown("Footer", &result),
        "```svelte\n<Footer />\n```\n"
    );
}

// =============================================================================
// SIGNATURES
// =============================================================================

#[test]
fn test_signature_of_typed_component() {
    let result = extract_component_props(DIALOG, &ExtractOptions::default());
    assert_eq!(
        props_signature(&result),
        "{ title: string; onclose?: () => void; open?: boolean; children?: Snippet }"
    );
}

#[test]
fn test_signature_includes_external_parents() {
    let result = extract_component_props(BUTTON, &ExtractOptions::default());
    assert_eq!(
        props_signature(&result),
        "{ variant?: Variant; loading?: boolean; label: string } & HTMLButtonAttributes"
    );
}
