//! Manifest loading.
//!
//! Deserialization itself is serde_json's job; this module only owns the
//! entry-boundary checks (existing file, readable content) and wraps the
//! parse failure with the offending path.

use std::path::Path;

use crate::error::ManifestError;
use crate::manifest::Manifest;

/// Load a [`Manifest`] from a JSON file.
///
/// Returns `ManifestError::InvalidPath` if `path` is empty or does not
/// point at an existing file, `ManifestError::Parse` (with path context)
/// if the content is malformed.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(ManifestError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
