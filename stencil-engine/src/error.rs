//! Error types for stencil-engine.

use std::path::PathBuf;

use thiserror::Error;

use stencil_core::ManifestError;
use stencil_renderer::RenderError;

/// All errors that can abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Manifest loading failed (invalid path or malformed content).
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A unit referenced a model name with zero or more than one match
    /// in the manifest's model table.
    #[error("unknown model '{name}': expected exactly one entry in the model table")]
    UnknownModel { name: String },

    /// The render capability could not produce text.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O failure writing output, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
