//! Error types for stencil-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest path was empty or did not point at an existing file.
    #[error("manifest path must be an existing JSON file: {path}")]
    InvalidPath { path: PathBuf },

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
