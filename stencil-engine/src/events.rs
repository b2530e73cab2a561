//! Run observation.
//!
//! The orchestrator never logs on its own; it reports well-defined
//! events through an [`EventSink`] injected at construction. The
//! default sink routes everything to `tracing`.

use std::path::Path;

use crate::error::GenerateError;
use crate::references::ReferenceError;

/// Observer for generation-run events.
pub trait EventSink {
    /// A unit is about to be resolved and rendered.
    fn unit_started(&self, template: &str, output: &Path);

    /// A unit's output file has been written. One call per generated file.
    fn unit_completed(&self, output: &Path);

    /// A declared reference project failed to load and was skipped.
    fn reference_load_failed(&self, project: &Path, error: &ReferenceError);

    /// The run is aborting with its first failure.
    fn run_failed(&self, error: &GenerateError);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn unit_started(&self, template: &str, output: &Path) {
        (**self).unit_started(template, output);
    }

    fn unit_completed(&self, output: &Path) {
        (**self).unit_completed(output);
    }

    fn reference_load_failed(&self, project: &Path, error: &ReferenceError) {
        (**self).reference_load_failed(project, error);
    }

    fn run_failed(&self, error: &GenerateError) {
        (**self).run_failed(error);
    }
}

/// [`EventSink`] backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn unit_started(&self, template: &str, output: &Path) {
        tracing::debug!("generating '{template}' -> {}", output.display());
    }

    fn unit_completed(&self, output: &Path) {
        tracing::info!("generated {}", output.display());
    }

    fn reference_load_failed(&self, project: &Path, error: &ReferenceError) {
        tracing::warn!("skipping reference project {}: {error}", project.display());
    }

    fn run_failed(&self, error: &GenerateError) {
        tracing::error!("generation run failed: {error}");
    }
}
