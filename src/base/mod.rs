//! Foundation types for the propsift engine.
//!
//! This module provides the primitives every scanner is built on:
//! - [`Cursor`] - Character cursor with O(1) lookahead/lookbehind
//! - [`StringTracker`] - String-literal state shared by all scanners
//! - [`text`] - Identifier classes and idempotent text normalizers
//!
//! This module has NO dependencies on other propsift modules.

mod cursor;
pub mod text;

pub use cursor::{Cursor, StringTracker, is_quote};
pub use text::{is_ident_char, is_ident_start};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
