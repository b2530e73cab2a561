//! The parsed manifest tree.
//!
//! Field names follow the on-disk JSON format (`templatesPath`,
//! `targetRoot`, `$modelRef`, ...) so existing manifests keep working.
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. The tree is a read-only snapshot for one generation run — no
//! node is mutated during traversal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Manifest root
// ---------------------------------------------------------------------------

/// Root of a generation manifest.
///
/// The root is the implicit top directory: like every [`DirectoryNode`]
/// it carries an ordered sequence of `items` and an ordered sequence of
/// nested `paths`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Root directory the renderer searches for templates.
    #[serde(default)]
    pub templates_path: PathBuf,

    /// Informational manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Paths to external projects whose content is loaded into reference
    /// handles before traversal begins.
    #[serde(default)]
    pub projects: Vec<PathBuf>,

    /// Named model table. Names must be unique; a unit referencing an
    /// absent or duplicated name fails the run.
    #[serde(default)]
    pub models: Vec<ModelEntry>,

    /// Root directory all output paths are composed under.
    #[serde(default)]
    pub target_root: PathBuf,

    /// Units generated directly under `target_root`.
    #[serde(default)]
    pub items: Vec<Unit>,

    /// Nested directory levels under `target_root`.
    #[serde(default)]
    pub paths: Vec<DirectoryNode>,

    /// Extra reference descriptors, loaded alongside `projects`.
    #[serde(rename = "additionalMetadataReferences", default)]
    pub additional_references: Vec<PathBuf>,

    /// Application name passed through to the render capability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
}

impl Manifest {
    /// The application name for a run: `applicationName`, else the
    /// manifest `name`, else the product name.
    pub fn effective_application_name(&self) -> String {
        self.application_name
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "stencil".to_string())
    }
}

// ---------------------------------------------------------------------------
// Directory nodes
// ---------------------------------------------------------------------------

/// One level of nested output structure.
///
/// `output_path` is a relative segment; absolute composition happens only
/// during traversal and is never stored on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryNode {
    /// Informational name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Relative output-path segment, composed with ancestor segments.
    #[serde(default)]
    pub output_path: PathBuf,

    /// Units generated at this level.
    #[serde(default)]
    pub items: Vec<Unit>,

    /// Nested directory levels — recursion to arbitrary depth.
    #[serde(default)]
    pub paths: Vec<DirectoryNode>,
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// A single file to generate: one template, one output name, at most one
/// model source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Logical template name — no extension assumptions.
    pub name: String,

    /// Output file name, joined under the current accumulated directory.
    #[serde(rename = "outputName")]
    pub output_name: String,

    /// Name of an entry in the manifest's model table.
    #[serde(
        rename = "$modelRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model_ref: Option<String>,

    /// Inline model value. Ignored whenever `$modelRef` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<serde_json::Value>,
}

impl Unit {
    /// The unit's model source as a closed sum: a named reference takes
    /// precedence over an inline value; with neither, the unit renders
    /// model-less.
    pub fn model_source(&self) -> ModelSource<'_> {
        if let Some(name) = self.model_ref.as_deref() {
            return ModelSource::Reference(name);
        }
        if let Some(value) = self.model.as_ref() {
            return ModelSource::Inline(value);
        }
        ModelSource::Absent
    }
}

/// Where a unit's model comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelSource<'a> {
    /// No model — rendering proceeds with an absent-model signal.
    Absent,
    /// An inline value carried on the unit, passed through uninspected.
    Inline(&'a serde_json::Value),
    /// A name to look up in the manifest's model table.
    Reference(&'a str),
}

// ---------------------------------------------------------------------------
// Named models
// ---------------------------------------------------------------------------

/// A (name, value) pair in the manifest's model table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    /// Opaque value routed to the render capability without interpretation.
    pub value: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
