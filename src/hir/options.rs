//! Extraction options

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::parser::PropertyScanOptions;

/// Flags and names that control one extraction call.
///
/// Field names deserialize in camelCase so editor settings can be passed
/// through unchanged; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Join doc comment lines with single spaces
    pub normalize_comment: bool,
    /// Collapse whitespace in type text and tidy bracket spacing
    pub normalize_type: bool,
    /// Collapse whitespace in default values
    pub normalize_default_value: bool,
    /// Types for properties whose type is unknown, keyed by destructured name
    pub fallback_types: FxHashMap<String, String>,
    /// The call on the right-hand side of the intake statement
    pub intake_call: String,
    /// The call that marks a default value as bindable
    pub bindable_marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            normalize_comment: false,
            normalize_type: false,
            normalize_default_value: false,
            fallback_types: FxHashMap::default(),
            intake_call: "$props".to_string(),
            bindable_marker: "$bindable".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Options with every normalization flag enabled
    pub fn normalized() -> Self {
        Self {
            normalize_comment: true,
            normalize_type: true,
            normalize_default_value: true,
            ..Self::default()
        }
    }

    pub fn with_fallback_type(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fallback_types.insert(name.into(), ty.into());
        self
    }

    pub(crate) fn property_scan_options(&self) -> PropertyScanOptions {
        PropertyScanOptions {
            normalize_type: self.normalize_type,
            normalize_comment: self.normalize_comment,
        }
    }
}
