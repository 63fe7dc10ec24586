//! Data model produced by the extraction engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::parser::PropertyDeclaration;

/// Placeholder type used when no declared type could be resolved.
pub const UNKNOWN_TYPE: &str = "unknown";

/// The members and parents of one locally declared type or interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDefinition {
    pub entries: IndexMap<SmolStr, PropertyDeclaration>,
    /// Extended/intersected type names, deduplicated in encounter order.
    pub inherits: Vec<SmolStr>,
}

impl TypeDefinition {
    /// Fold another declaration of the same name into this one.
    ///
    /// Entries are last-write-wins; parents are appended if not yet present.
    pub fn merge(&mut self, other: TypeDefinition) {
        self.entries.extend(other.entries);
        for parent in other.inherits {
            push_unique(&mut self.inherits, parent);
        }
    }
}

/// Type name → definition, for every declaration in scope of one extraction.
pub type TypeMap = IndexMap<SmolStr, TypeDefinition>;

/// One property of a component, as shown to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub name: SmolStr,
    /// Declared type text, or [`UNKNOWN_TYPE`].
    #[serde(rename = "type")]
    pub type_text: String,
    pub required: bool,
    pub bindable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PropertyRecord {
    /// A property known only from the destructuring pattern.
    pub fn untyped(name: SmolStr) -> Self {
        Self {
            name,
            type_text: UNKNOWN_TYPE.to_string(),
            required: false,
            bindable: false,
            default_value: None,
            comment: None,
        }
    }

    pub fn is_unknown_type(&self) -> bool {
        self.type_text == UNKNOWN_TYPE
    }
}

/// Result of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub props: Vec<PropertyRecord>,
    /// Parent type names that are not declared locally.
    pub inherits: Vec<SmolStr>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.inherits.is_empty()
    }

    /// Find a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyRecord> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// Append `item` unless it is already present.
pub(crate) fn push_unique(list: &mut Vec<SmolStr>, item: SmolStr) {
    if !list.contains(&item) {
        list.push(item);
    }
}
