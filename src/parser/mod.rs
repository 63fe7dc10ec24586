//! Hand-written scanners for the intake pattern and type bodies.
//!
//! No full-language parser is involved. Each scanner walks the text one
//! character at a time over a [`crate::base::Cursor`], tracking string
//! literals, the three comment kinds and bracket depth:
//!
//! ```text
//! { a, b = 1, ...rest }     → destructure::scan_destructuring → [DestructuredBinding]
//! interface X { a: T; }     → properties::scan_properties      → {name → PropertyDeclaration}
//! A & B<C> | { d: E }       → split::split_top_level           → ["A", "B<C>", "{ d: E }"]
//! ```
//!
//! Scanners never fail: malformed input ends scanning and whatever was
//! accumulated is finalized once.

pub mod destructure;
pub mod properties;
pub mod split;
pub mod walk;

pub use destructure::{DestructuredBinding, scan_destructuring};
pub use properties::{PropertyDeclaration, PropertyScanOptions, ScanState, scan_properties};
pub use split::{split_top_level, strip_generics};
pub use walk::CodeWalker;
