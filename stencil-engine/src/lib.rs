//! # stencil-engine
//!
//! Manifest resolution and tree-traversal engine.
//!
//! Call [`pipeline::run_manifest_path`] to generate everything a manifest
//! file describes, or drive a [`Generator`] directly with an already
//! loaded [`stencil_core::Manifest`].
//!
//! The walk is depth-first and pre-order: at every level all declared
//! units render before any child directory is entered, sibling order is
//! declaration order, and the first failure aborts the whole run. The
//! one exception to fail-fast is the reference-loading phase, which
//! skips individual projects that fail to load.

pub mod error;
pub mod events;
pub mod paths;
pub mod pipeline;
pub mod references;
pub mod resolver;
pub mod walker;

pub use error::GenerateError;
pub use events::{EventSink, TracingSink};
pub use references::{FsReferenceLoader, ReferenceError, ReferenceLoader};
pub use walker::Generator;
