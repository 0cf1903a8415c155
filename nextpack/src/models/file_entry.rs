// src/models/file_entry.rs
use std::path::{Path, PathBuf};

/// A file discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as walked, i.e. the root joined with `relative_path`.
    pub path: PathBuf,
    pub relative_path: PathBuf,
    /// Basename.
    pub name: String,
    /// Suffix with its leading dot (`.tsx`), empty when there is none.
    pub extension: String,
}

impl FileEntry {
    /// Builds an entry for `path`, which must live under `root`.
    #[inline]
    #[must_use]
    pub fn new(root: &Path, path: &Path) -> Option<Self> {
        let relative_path = path.strip_prefix(root).ok()?.to_path_buf();
        let name = path.file_name()?.to_string_lossy().into_owned();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Some(Self {
            path: path.to_path_buf(),
            relative_path,
            name,
            extension,
        })
    }

    /// Number of path segments below the root.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.relative_path.components().count()
    }

    #[inline]
    #[must_use]
    pub fn relative_str(&self) -> String {
        self.relative_path.to_string_lossy().into_owned()
    }
}
