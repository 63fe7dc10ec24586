//! IDE features: presentation of extraction results for editor requests.
//!
//! Pure functions: take an [`ExtractionResult`](crate::hir::ExtractionResult)
//! in, return display strings out. Editor protocol types are converted at the
//! embedding boundary.

mod hover;

pub use hover::{props_signature, render_props_markdown};
