//! Reference loading — the once-per-run phase that turns declared
//! external projects into opaque handles for the render capability.
//!
//! A project is either a single `.tera` file or a directory of them.
//! Loading happens before traversal begins; a project that fails to load
//! is reported through the sink and skipped, and the run continues with
//! whatever references did load. This is the one tolerated partial
//! failure in the engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

use stencil_core::Manifest;
use stencil_renderer::ReferenceHandle;

use crate::events::EventSink;

/// Errors from loading a single reference project.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The declared project path does not exist.
    #[error("reference project not found: {path}")]
    NotFound { path: PathBuf },

    /// The project exists but contains no loadable template source.
    #[error("reference project has no template sources: {path}")]
    Empty { path: PathBuf },

    /// Filesystem failure while reading project content.
    #[error("reference io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReferenceError {
    ReferenceError::Io {
        path: path.into(),
        source,
    }
}

/// The reference-loading boundary: one project path in, zero or more
/// opaque handles out.
pub trait ReferenceLoader {
    fn load(&self, project: &Path) -> Result<Vec<ReferenceHandle>, ReferenceError>;
}

impl<L: ReferenceLoader + ?Sized> ReferenceLoader for &L {
    fn load(&self, project: &Path) -> Result<Vec<ReferenceHandle>, ReferenceError> {
        (**self).load(project)
    }
}

/// Filesystem-backed [`ReferenceLoader`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReferenceLoader;

impl FsReferenceLoader {
    pub fn new() -> Self {
        FsReferenceLoader
    }
}

fn handle_name(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_sources(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ReferenceError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_sources(&path, out)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("tera") {
            out.push(path);
        }
    }
    Ok(())
}

impl ReferenceLoader for FsReferenceLoader {
    fn load(&self, project: &Path) -> Result<Vec<ReferenceHandle>, ReferenceError> {
        if !project.exists() {
            return Err(ReferenceError::NotFound {
                path: project.to_path_buf(),
            });
        }

        if project.is_file() {
            let name = project
                .file_name()
                .map(|n| handle_name(Path::new(n)))
                .unwrap_or_default();
            let source = std::fs::read_to_string(project).map_err(|e| io_err(project, e))?;
            return Ok(vec![ReferenceHandle { name, source }]);
        }

        let mut files = Vec::new();
        collect_sources(project, &mut files)?;
        if files.is_empty() {
            return Err(ReferenceError::Empty {
                path: project.to_path_buf(),
            });
        }
        files.sort();

        let mut handles = Vec::with_capacity(files.len());
        for path in files {
            let rel = path.strip_prefix(project).unwrap_or(path.as_path());
            let source = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            handles.push(ReferenceHandle {
                name: handle_name(rel),
                source,
            });
        }
        Ok(handles)
    }
}

/// Load every reference project the manifest declares (`projects` first,
/// then `additionalMetadataReferences`), skipping projects that fail to
/// load.
pub fn build_references<L: ReferenceLoader, S: EventSink>(
    loader: &L,
    manifest: &Manifest,
    sink: &S,
) -> Vec<ReferenceHandle> {
    let declared = manifest
        .projects
        .iter()
        .chain(manifest.additional_references.iter());

    let mut handles = Vec::new();
    for project in declared {
        match loader.load(project) {
            Ok(mut loaded) => handles.append(&mut loaded),
            Err(err) => sink.reference_load_failed(project, &err),
        }
    }
    handles
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tempfile::TempDir;

    use crate::error::GenerateError;

    use super::*;

    #[derive(Default)]
    struct FailureLog(Mutex<Vec<PathBuf>>);

    impl EventSink for FailureLog {
        fn unit_started(&self, _: &str, _: &Path) {}
        fn unit_completed(&self, _: &Path) {}
        fn reference_load_failed(&self, project: &Path, _: &ReferenceError) {
            self.0.lock().unwrap().push(project.to_path_buf());
        }
        fn run_failed(&self, _: &GenerateError) {}
    }

    #[test]
    fn loads_single_file_project() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Footer.tera");
        std::fs::write(&file, "footer").unwrap();

        let handles = FsReferenceLoader::new().load(&file).expect("load");
        assert_eq!(handles.len(), 1);
        assert_eq!(handles[0].name, "footer.tera");
        assert_eq!(handles[0].source, "footer");
    }

    #[test]
    fn loads_directory_project_recursively() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.tera"), "a").unwrap();
        std::fs::write(dir.path().join("nested").join("b.tera"), "b").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "x").unwrap();

        let handles = FsReferenceLoader::new().load(dir.path()).expect("load");
        let names: Vec<_> = handles.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["a.tera", "nested/b.tera"]);
    }

    #[test]
    fn missing_project_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FsReferenceLoader::new()
            .load(&dir.path().join("gone"))
            .unwrap_err();
        assert!(matches!(err, ReferenceError::NotFound { .. }));
    }

    #[test]
    fn directory_without_templates_is_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();
        let err = FsReferenceLoader::new().load(dir.path()).unwrap_err();
        assert!(matches!(err, ReferenceError::Empty { .. }));
    }

    #[test]
    fn build_references_skips_failing_projects() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.tera");
        std::fs::write(&good, "ok").unwrap();
        let bad = dir.path().join("missing.tera");

        let manifest = Manifest {
            projects: vec![good.clone(), bad.clone()],
            ..Default::default()
        };

        let sink = FailureLog::default();
        let handles = build_references(&FsReferenceLoader::new(), &manifest, &sink);

        assert_eq!(handles.len(), 1, "only the loadable project contributes");
        assert_eq!(*sink.0.lock().unwrap(), vec![bad]);
    }

    #[test]
    fn additional_references_load_after_projects() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.tera");
        let second = dir.path().join("second.tera");
        std::fs::write(&first, "1").unwrap();
        std::fs::write(&second, "2").unwrap();

        let manifest = Manifest {
            projects: vec![first],
            additional_references: vec![second],
            ..Default::default()
        };

        let sink = FailureLog::default();
        let handles = build_references(&FsReferenceLoader::new(), &manifest, &sink);
        let names: Vec<_> = handles.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["first.tera", "second.tera"]);
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
