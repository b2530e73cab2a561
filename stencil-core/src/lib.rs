//! Stencil core library — manifest tree, JSON loading, errors.
//!
//! Public API surface:
//! - [`manifest`] — the parsed manifest tree ([`Manifest`], [`DirectoryNode`], [`Unit`])
//! - [`loader`] — load a manifest from a JSON file
//! - [`error`] — [`ManifestError`]

pub mod error;
pub mod loader;
pub mod manifest;

pub use error::ManifestError;
pub use manifest::{DirectoryNode, Manifest, ModelEntry, ModelSource, Unit};
