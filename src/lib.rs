//! # propsift-base
//!
//! Core library for extracting component property metadata from Svelte
//! `$props()` declarations.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Hover markdown and signatures for extraction results
//!   ↓
//! project   → Component files, settings, mtime-keyed props cache
//!   ↓
//! hir       → Type map, intake statement, merge pipeline
//!   ↓
//! syntax    → Component script blocks
//!   ↓
//! parser    → Destructuring and property scanners, top-level splitter
//!   ↓
//! base      → Primitives (Cursor, StringTracker, text normalization)
//! ```
//!
//! ## Example
//!
//! ```
//! use propsift::{ExtractOptions, extract_props};
//!
//! let script = "interface Props { label: string }\nlet { label, size = 'md' }: Props = $props();";
//! let result = extract_props(&[script], &ExtractOptions::default());
//!
//! assert_eq!(result.props[0].type_text, "string");
//! assert_eq!(result.props[1].default_value.as_deref(), Some("'md'"));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project → ide)
// ============================================================================

/// Foundation types: Cursor, StringTracker, text normalization
pub mod base;

/// Parser: hand-written scanners for patterns and type bodies
pub mod parser;

/// Syntax: script blocks of a component file
pub mod syntax;

/// High-level IR: type map and props extraction
pub mod hir;

/// Project management: file loading, settings, props cache
pub mod project;

/// IDE features: hover content, completion signatures
pub mod ide;

// Re-export the extraction entry points
pub use hir::{
    ExtractOptions, ExtractionResult, PropertyRecord, UNKNOWN_TYPE, extract_component_props,
    extract_props,
};

// Re-export foundation types
pub use base::{TextRange, TextSize};
