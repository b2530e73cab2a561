//! Generation orchestration — the depth-first tree walker.
//!
//! # Traversal
//!
//! 1. Start at the manifest root with `currentPath = targetRoot`.
//! 2. At a directory node, extend the accumulated path with the node's
//!    `outputPath` segment.
//! 3. Process the node's own units first, then recurse into its child
//!    directories, each in declared order.
//! 4. Per unit: resolve the model, render, write the file under the
//!    accumulated directory.
//!
//! The walk is a single deterministic sequence; the first resolver,
//! render, or write failure aborts the whole run. Re-running the same
//! manifest against the same target root is byte-identical (the render
//! capability is deterministic and writes are full overwrites).

use std::path::Path;

use stencil_core::{DirectoryNode, Manifest, ModelEntry, Unit};
use stencil_renderer::{Render, ReferenceHandle, RenderOptions};

use crate::error::{io_err, GenerateError};
use crate::events::EventSink;
use crate::paths::child_path;
use crate::resolver;

/// Drives one generation run: owns the render capability and the event
/// sink threaded to every unit.
pub struct Generator<R: Render, S: EventSink> {
    renderer: R,
    sink: S,
}

impl<R: Render, S: EventSink> Generator<R, S> {
    pub fn new(renderer: R, sink: S) -> Self {
        Generator { renderer, sink }
    }

    /// The injected event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Generate every file the manifest describes.
    ///
    /// `references` were built once before traversal; they are passed
    /// read-only to every render call.
    pub fn run(
        &self,
        manifest: &Manifest,
        references: &[ReferenceHandle],
    ) -> Result<(), GenerateError> {
        let opts = RenderOptions {
            templates_root: manifest.templates_path.clone(),
            application_name: manifest.effective_application_name(),
            references: references.to_vec(),
        };

        for unit in &manifest.items {
            self.process_unit(unit, &manifest.models, &manifest.target_root, &opts)?;
        }
        for node in &manifest.paths {
            self.walk_directory(node, &manifest.models, &manifest.target_root, &opts)?;
        }
        Ok(())
    }

    fn walk_directory(
        &self,
        node: &DirectoryNode,
        models: &[ModelEntry],
        current: &Path,
        opts: &RenderOptions,
    ) -> Result<(), GenerateError> {
        let next = child_path(current, &node.output_path);
        for unit in &node.items {
            self.process_unit(unit, models, &next, opts)?;
        }
        for child in &node.paths {
            self.walk_directory(child, models, &next, opts)?;
        }
        Ok(())
    }

    fn process_unit(
        &self,
        unit: &Unit,
        models: &[ModelEntry],
        directory: &Path,
        opts: &RenderOptions,
    ) -> Result<(), GenerateError> {
        let output = child_path(directory, Path::new(&unit.output_name));
        self.sink.unit_started(&unit.name, &output);

        let model = resolver::resolve(unit, models)?;
        let content = self.renderer.render(&unit.name, model, opts)?;
        write_output(&output, &content)?;

        self.sink.unit_completed(&output);
        Ok(())
    }
}

/// Persist rendered content: ensure the parent directory exists, remove
/// any pre-existing file at the exact path, write the new content fully.
fn write_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| io_err(path, e))?;
    }
    std::fs::write(path, content).map_err(|e| io_err(path, e))
}
