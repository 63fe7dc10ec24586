//! Component file discovery and loading.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::project::error::{ProjectError, ProjectResult};

/// Extension of component files.
pub const COMPONENT_EXTENSION: &str = "svelte";

/// Directories never searched for components.
const SKIPPED_DIRS: [&str; 4] = ["node_modules", "target", "build", "dist"];

/// Get the file extension of a path.
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Check that `path` names a component file.
pub fn validate_extension(path: &Path) -> ProjectResult<()> {
    match get_extension(path) {
        Some(COMPONENT_EXTENSION) => Ok(()),
        _ => Err(ProjectError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Read a component file after validating its extension.
pub fn load_component(path: &Path) -> ProjectResult<String> {
    validate_extension(path)?;
    std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))
}

/// Every component file under `root`, sorted, skipping hidden and build
/// directories.
pub fn collect_component_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| validate_extension(path).is_ok())
        .collect();
    paths.sort();
    paths
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.file_type().is_dir() && (name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()))
}
