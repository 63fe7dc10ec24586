//! Merge pipeline: intake statement + type map → [`ExtractionResult`].
//!
//! ```text
//! fragments ──find_intake──► pattern, annotation
//!     │                          │          │
//!     └─build_type_map─► TypeMap ┴─resolve──┤
//!                                           ▼
//!            scan_destructuring(pattern) ─► union ─► fallback types
//! ```
//!
//! Declared entries come first in declaration order, followed by names that
//! only occur in the destructuring pattern.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::parser::{
    CodeWalker, DestructuredBinding, PropertyDeclaration, PropertyScanOptions, scan_destructuring,
    scan_properties, split_top_level, strip_generics,
};
use crate::syntax::extract_script_blocks;

use super::intake::find_intake;
use super::options::ExtractOptions;
use super::type_map::build_type_map;
use super::types::{ExtractionResult, PropertyRecord, TypeMap, push_unique};

/// Extract the props of a component from its script fragments, in source
/// order. Returns an empty result when no fragment has an intake statement.
pub fn extract_props(fragments: &[&str], options: &ExtractOptions) -> ExtractionResult {
    let Some(intake) = fragments
        .iter()
        .find_map(|fragment| find_intake(fragment, &options.intake_call))
    else {
        tracing::debug!(
            fragments = fragments.len(),
            call = %options.intake_call,
            "no intake statement found"
        );
        return ExtractionResult::default();
    };

    let scan_options = options.property_scan_options();
    let type_map = build_type_map(fragments, scan_options);

    let mut resolver = Resolver::new(&type_map, scan_options);
    if let Some(annotation) = &intake.annotation {
        resolver.resolve_annotation(annotation);
    }
    let bindings = scan_destructuring(&intake.pattern, options.normalize_default_value);

    let result = merge(resolver.entries, resolver.inherits, bindings, options);
    tracing::debug!(
        props = result.props.len(),
        inherits = result.inherits.len(),
        "extracted props"
    );
    result
}

/// Extract the props of a whole component source, reading its `<script>`
/// blocks first.
pub fn extract_component_props(source: &str, options: &ExtractOptions) -> ExtractionResult {
    let blocks = extract_script_blocks(source);
    let fragments: Vec<&str> = blocks.iter().map(|block| block.content).collect();
    extract_props(&fragments, options)
}

/// Resolves annotation parts against the type map.
struct Resolver<'a> {
    type_map: &'a TypeMap,
    options: PropertyScanOptions,
    entries: IndexMap<SmolStr, PropertyDeclaration>,
    inherits: Vec<SmolStr>,
    visited: FxHashSet<SmolStr>,
}

impl<'a> Resolver<'a> {
    fn new(type_map: &'a TypeMap, options: PropertyScanOptions) -> Self {
        Self {
            type_map,
            options,
            entries: IndexMap::new(),
            inherits: Vec::new(),
            visited: FxHashSet::default(),
        }
    }

    fn resolve_annotation(&mut self, annotation: &str) {
        for part in split_top_level(annotation, &['|', '&']) {
            self.resolve_part(&part);
        }
    }

    fn resolve_part(&mut self, part: &str) {
        if let Some(body) = part.strip_prefix('{') {
            let body = body.strip_suffix('}').unwrap_or(body);
            self.entries.extend(scan_properties(body, self.options));
            return;
        }
        if let Some(inner) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) {
            self.resolve_annotation(inner);
            return;
        }

        let name = strip_generics(part);
        if self.type_map.contains_key(name) {
            self.resolve_local(name);
        } else {
            tracing::trace!(reference = %part, "external type reference");
            push_unique(&mut self.inherits, SmolStr::new(part));
        }
    }

    /// Parents first, so the type's own entries win.
    fn resolve_local(&mut self, name: &str) {
        if !self.visited.insert(SmolStr::new(name)) {
            return;
        }
        let Some(definition) = self.type_map.get(name) else {
            return;
        };
        for parent in &definition.inherits {
            self.resolve_part(parent);
        }
        self.entries.extend(
            definition
                .entries
                .iter()
                .map(|(key, declaration)| (key.clone(), declaration.clone())),
        );
    }
}

fn merge(
    entries: IndexMap<SmolStr, PropertyDeclaration>,
    inherits: Vec<SmolStr>,
    bindings: Vec<DestructuredBinding>,
    options: &ExtractOptions,
) -> ExtractionResult {
    let mut props: IndexMap<SmolStr, PropertyRecord> = entries
        .into_iter()
        .map(|(name, declaration)| {
            let record = PropertyRecord {
                name: name.clone(),
                required: declaration.required(),
                type_text: declaration.type_text,
                bindable: false,
                default_value: None,
                comment: declaration.comment,
            };
            (name, record)
        })
        .collect();

    for binding in bindings {
        let (bindable, default_value) = match binding.default_value {
            Some(value) => match unwrap_marker(&value, &options.bindable_marker) {
                Some(inner) => (true, non_empty(inner)),
                None => (false, Some(value)),
            },
            None => (false, None),
        };
        let record = props
            .entry(binding.name.clone())
            .or_insert_with(|| PropertyRecord::untyped(binding.name));
        record.bindable = bindable;
        record.default_value = default_value;
    }

    for record in props.values_mut().filter(|record| record.is_unknown_type()) {
        if let Some(fallback) = options.fallback_types.get(record.name.as_str()) {
            record.type_text = fallback.clone();
        }
    }

    ExtractionResult {
        props: props.into_values().collect(),
        inherits,
    }
}

/// `marker(inner)` → `inner`, when the call spans the whole value.
fn unwrap_marker(value: &str, marker: &str) -> Option<String> {
    let rest = value.strip_prefix(marker)?;
    let mut walker = CodeWalker::new(rest);
    walker.skip_trivia();
    if walker.current() != Some('(') {
        return None;
    }
    let inner = walker.read_group('(', ')');
    walker.skip_trivia();
    walker.cursor().is_at_end().then(|| inner.trim().to_string())
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
