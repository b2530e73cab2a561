//! Output-path accumulation.

use std::path::{Path, PathBuf};

/// Compose a child path under an accumulated parent directory.
///
/// Pure join — no existence check, no normalization beyond standard
/// path-join semantics. An empty segment is a no-op join, so directory
/// nodes without an `outputPath` contribute nothing to the composition.
pub fn child_path(parent: &Path, segment: &Path) -> PathBuf {
    if segment.as_os_str().is_empty() {
        return parent.to_path_buf();
    }
    parent.join(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segment_under_parent() {
        assert_eq!(
            child_path(Path::new("out"), Path::new("src")),
            PathBuf::from("out/src")
        );
    }

    #[test]
    fn empty_segment_is_a_no_op() {
        assert_eq!(child_path(Path::new("out"), Path::new("")), PathBuf::from("out"));
    }

    #[test]
    fn composes_root_to_leaf() {
        let a = child_path(Path::new("out"), Path::new("a"));
        let b = child_path(&a, Path::new("b"));
        let file = child_path(&b, Path::new("x.txt"));
        assert_eq!(file, PathBuf::from("out/a/b/x.txt"));
    }

    #[test]
    fn multi_level_segment_passes_through() {
        assert_eq!(
            child_path(Path::new("out"), Path::new("a/b")),
            PathBuf::from("out/a/b")
        );
    }
}
