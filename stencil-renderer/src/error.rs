//! Error types for stencil-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No template matched the requested logical name.
    #[error("template '{name}' not found under {root}")]
    TemplateNotFound { name: String, root: PathBuf },

    /// Filesystem error while loading templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
