//! Hover content for a component tag.

use crate::base::text::normalize_type;
use crate::hir::{ExtractionResult, PropertyRecord};

/// Build markdown hover content listing a component's props.
///
/// The props appear as a `svelte` code block shaped like a tag with one
/// `name?: type = default` line per prop (`bind:` marks bindable ones),
/// followed by the documented props and an **Extends** line for external
/// parents.
pub fn render_props_markdown(component: &str, result: &ExtractionResult) -> String {
    let mut content = String::new();

    content.push_str("```svelte\n<");
    content.push_str(component);
    if result.props.is_empty() {
        content.push_str(" />");
    } else {
        content.push('\n');
        for record in &result.props {
            content.push_str("  ");
            content.push_str(&prop_line(record));
            content.push('\n');
        }
        content.push_str("/>");
    }
    content.push_str("\n```\n");

    // Documentation
    let documented: Vec<_> = result
        .props
        .iter()
        .filter_map(|record| Some((record.name.as_str(), record.comment.as_deref()?)))
        .collect();
    if !documented.is_empty() {
        content.push_str("\n---\n\n");
        for (name, doc) in documented {
            content.push_str("- `");
            content.push_str(name);
            content.push_str("`: ");
            content.push_str(&doc.replace('\n', " "));
            content.push('\n');
        }
    }

    if !result.inherits.is_empty() {
        let parents: Vec<String> = result
            .inherits
            .iter()
            .map(|parent| format!("`{parent}`"))
            .collect();
        content.push_str("\n**Extends:** ");
        content.push_str(&parents.join(", "));
        content.push('\n');
    }

    content
}

/// One-line object type for completion details, e.g.
/// `{ label: string; size?: 'sm' | 'lg' } & Base`.
pub fn props_signature(result: &ExtractionResult) -> String {
    let members: Vec<String> = result
        .props
        .iter()
        .map(|record| {
            let marker = if record.required { "" } else { "?" };
            format!("{}{marker}: {}", record.name, normalize_type(&record.type_text))
        })
        .collect();

    let mut sig = if members.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", members.join("; "))
    };
    for parent in &result.inherits {
        sig.push_str(" & ");
        sig.push_str(parent);
    }
    sig
}

fn prop_line(record: &PropertyRecord) -> String {
    let mut line = String::new();
    if record.bindable {
        line.push_str("bind:");
    }
    line.push_str(&record.name);
    if !record.required {
        line.push('?');
    }
    line.push_str(": ");
    line.push_str(&normalize_type(&record.type_text));
    if let Some(default) = &record.default_value {
        line.push_str(" = ");
        line.push_str(&normalize_type(default));
    }
    line
}
