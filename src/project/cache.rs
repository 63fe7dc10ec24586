//! Per-file cache of extraction results.
//!
//! Entries are keyed by path and remember the file's modification time; a
//! lookup re-extracts when the file changed on disk. Results are shared as
//! `Arc<ExtractionResult>` so hover and completion requests can hold them
//! without copying.
//!
//! ```ignore
//! let cache = PropsCache::new(ExtractOptions::default());
//! let props = cache.get_or_extract(Path::new("src/lib/Button.svelte"))?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::hir::{ExtractOptions, ExtractionResult, extract_component_props};
use crate::project::error::{ProjectError, ProjectResult};
use crate::project::file_loader::{collect_component_paths, load_component, validate_extension};

#[derive(Debug, Clone)]
struct CacheEntry {
    modified: SystemTime,
    result: Arc<ExtractionResult>,
}

/// Thread-safe cache of component props, keyed by path + modification time.
#[derive(Debug, Default)]
pub struct PropsCache {
    options: ExtractOptions,
    entries: RwLock<FxHashMap<PathBuf, CacheEntry>>,
}

impl PropsCache {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Return the cached result for `path`, extracting it if the file is
    /// new or was modified since it was cached.
    pub fn get_or_extract(&self, path: &Path) -> ProjectResult<Arc<ExtractionResult>> {
        validate_extension(path)?;
        let modified = modified_time(path)?;

        if let Some(result) = self.fresh(path, modified) {
            return Ok(result);
        }

        let source = load_component(path)?;
        let result = Arc::new(extract_component_props(&source, &self.options));
        tracing::debug!(
            path = %path.display(),
            props = result.props.len(),
            "cached component props"
        );

        self.entries.write().insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                result: Arc::clone(&result),
            },
        );
        Ok(result)
    }

    fn fresh(&self, path: &Path, modified: SystemTime) -> Option<Arc<ExtractionResult>> {
        self.entries
            .read()
            .get(path)
            .filter(|entry| entry.modified == modified)
            .map(|entry| Arc::clone(&entry.result))
    }

    /// The cached result for `path`, without checking the file on disk.
    pub fn cached(&self, path: &Path) -> Option<Arc<ExtractionResult>> {
        self.entries
            .read()
            .get(path)
            .map(|entry| Arc::clone(&entry.result))
    }

    /// Drop the entry for `path`. Returns whether one existed.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.write().remove(path).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Extract many files in parallel. Returns the failures.
    pub fn warm(&self, paths: &[PathBuf]) -> Vec<ProjectError> {
        let failures: Vec<ProjectError> = paths
            .par_iter()
            .filter_map(|path| self.get_or_extract(path).err())
            .collect();
        tracing::debug!(
            files = paths.len(),
            failed = failures.len(),
            "warmed props cache"
        );
        failures
    }

    /// Extract every component file under `root`.
    pub fn warm_dir(&self, root: &Path) -> Vec<ProjectError> {
        self.warm(&collect_component_paths(root))
    }
}

fn modified_time(path: &Path) -> ProjectResult<SystemTime> {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| ProjectError::io(path, e))
}
