//! Tera rendering engine — [`Render`] trait and [`TeraRenderer`].
//!
//! Template names are logical identifiers: a unit asking for `readme`
//! resolves `readme` or `readme.tera` under the search root, matched
//! case-insensitively against forward-slash relative paths.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Options and reference handles
// ---------------------------------------------------------------------------

/// An opaque named payload carried alongside a run and consumed read-only
/// by the renderer: one extra template source that becomes resolvable
/// (includable, importable) during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceHandle {
    /// Template name the source is registered under.
    pub name: String,
    /// Template source text.
    pub source: String,
}

/// Per-run context threaded to every render call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Root directory searched for `.tera` template files.
    pub templates_root: PathBuf,
    /// Application name exposed to templates as `application_name`.
    pub application_name: String,
    /// Extra template sources loaded from external projects.
    pub references: Vec<ReferenceHandle>,
}

// ---------------------------------------------------------------------------
// Render trait
// ---------------------------------------------------------------------------

/// The render capability boundary: template name + optional opaque model
/// + options → text.
///
/// The model is routed through without interpretation; `None` renders
/// with no `model` variable in scope.
pub trait Render {
    fn render(
        &self,
        template_name: &str,
        model: Option<&serde_json::Value>,
        opts: &RenderOptions,
    ) -> Result<String, RenderError>;
}

impl<R: Render + ?Sized> Render for &R {
    fn render(
        &self,
        template_name: &str,
        model: Option<&serde_json::Value>,
        opts: &RenderOptions,
    ) -> Result<String, RenderError> {
        (**self).render(template_name, model, opts)
    }
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_search_root(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    // Names are lowercased, so case-colliding files map to one key;
    // sorting keeps the winner independent of read_dir order.
    files.sort();
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(opts: &RenderOptions) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in load_search_root(&opts.templates_root)? {
        templates.insert(name, content);
    }
    // Reference handles shadow same-named search-root templates.
    for handle in &opts.references {
        templates.insert(
            normalize_template_name(Path::new(&handle.name)),
            handle.source.clone(),
        );
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

fn resolve_name(tera: &Tera, logical: &str) -> Option<String> {
    let wanted = normalize_template_name(Path::new(logical));
    let with_suffix = format!("{wanted}.tera");
    let mut names = tera.get_template_names();
    names
        .find(|n| **n == wanted || **n == with_suffix)
        .map(|n| n.to_string())
}

// ---------------------------------------------------------------------------
// TeraRenderer
// ---------------------------------------------------------------------------

/// Tera-backed [`Render`] implementation.
///
/// The engine is assembled per call from the search root plus reference
/// handles, so a single renderer value can serve runs against different
/// template roots. Rendering is deterministic for identical inputs.
#[derive(Debug, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        TeraRenderer
    }
}

impl Render for TeraRenderer {
    fn render(
        &self,
        template_name: &str,
        model: Option<&serde_json::Value>,
        opts: &RenderOptions,
    ) -> Result<String, RenderError> {
        let tera = build_tera(opts)?;
        let resolved = resolve_name(&tera, template_name).ok_or_else(|| {
            RenderError::TemplateNotFound {
                name: template_name.to_string(),
                root: opts.templates_root.clone(),
            }
        })?;

        let mut ctx = tera::Context::new();
        ctx.insert("application_name", &opts.application_name);
        if let Some(value) = model {
            ctx.insert("model", value);
        }

        tracing::debug!(
            "rendering '{resolved}' from {}",
            opts.templates_root.display()
        );
        tera.render(&resolved, &ctx).map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
