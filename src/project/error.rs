//! Error types for project-level operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading component files or settings.
///
/// The extraction engine itself never fails; only the file system and
/// settings parsing around it can.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A component or settings file could not be read.
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path is not a component file.
    #[error("Unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Settings JSON did not match [`ExtractOptions`](crate::hir::ExtractOptions).
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ProjectError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
