//! Extraction settings from JSON, e.g. an editor configuration section.
//!
//! ```json
//! { "normalizeType": true, "fallbackTypes": { "children": "Snippet" } }
//! ```

use std::path::Path;

use crate::hir::ExtractOptions;
use crate::project::error::{ProjectError, ProjectResult};

impl ExtractOptions {
    /// Parse options from a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> ProjectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read options from a JSON settings file.
pub fn load_settings(path: &Path) -> ProjectResult<ExtractOptions> {
    let json = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;
    let options = ExtractOptions::from_json(&json)?;
    tracing::debug!(path = %path.display(), "loaded extraction settings");
    Ok(options)
}
