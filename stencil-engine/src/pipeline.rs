//! Canonical generation entrypoint used by the CLI.

use std::path::Path;

use stencil_core::loader;
use stencil_renderer::Render;

use crate::error::GenerateError;
use crate::events::EventSink;
use crate::references::{build_references, FsReferenceLoader};
use crate::walker::Generator;

/// Run a full generation from a manifest file.
///
/// Loads the manifest, builds reference handles from its declared
/// projects (failures there are skipped per project), then walks the
/// tree. The first traversal failure aborts the run and is reported to
/// the sink before being returned.
pub fn run_manifest_path<R: Render, S: EventSink>(
    path: &Path,
    renderer: R,
    sink: S,
) -> Result<(), GenerateError> {
    let manifest = loader::load_manifest(path)?;
    let generator = Generator::new(renderer, sink);
    let references = build_references(&FsReferenceLoader::new(), &manifest, generator.sink());

    let result = generator.run(&manifest, &references);
    if let Err(err) = &result {
        generator.sink().run_failed(err);
    }
    result
}
