//! The extraction engine: from script fragments to a component's props.
//!
//! Each call is independent; nothing is retained between calls.
//!
//! ## Key Types
//!
//! - [`ExtractOptions`] - Normalization flags, fallback types, rune names
//! - [`TypeMap`] - Every local `interface`/`type` declaration by name
//! - [`IntakeStatement`] - The `let { … }: T = $props()` statement
//! - [`ExtractionResult`] - Merged [`PropertyRecord`]s plus external parents
//!
//! ## Pipeline
//!
//! ```text
//! fragments (source order)
//!     │
//!     ├──► find_intake        ← first intake statement
//!     │
//!     ├──► build_type_map     ← all declarations, bodies via scan_properties
//!     │
//!     ▼
//! extract_props               ← resolve annotation, scan pattern, merge
//! ```

mod extract;
mod intake;
mod options;
mod type_map;
mod types;

pub use extract::{extract_component_props, extract_props};
pub use intake::{IntakeStatement, find_intake};
pub use options::ExtractOptions;
pub use type_map::build_type_map;
pub use types::{ExtractionResult, PropertyRecord, TypeDefinition, TypeMap, UNKNOWN_TYPE};
