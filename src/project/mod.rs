//! Project layer: component files on disk, settings and the props cache.
//!
//! Everything here is fallible and reports [`ProjectError`]; the extraction
//! engine underneath never fails.

mod cache;
mod error;
pub mod file_loader;
mod settings;

pub use cache::PropsCache;
pub use error::{ProjectError, ProjectResult};
pub use file_loader::{COMPONENT_EXTENSION, collect_component_paths, load_component};
pub use settings::load_settings;
