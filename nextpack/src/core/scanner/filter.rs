// src/core/scanner/filter.rs
use crate::config::CollectorConfig;
use crate::models::FileEntry;
use std::path::Path;

/// Decides whether a walked file goes into the report:
/// - its extension is accepted, or it is a special file
/// - its basename is not explicitly excluded
/// - no excluded directory fragment occurs in its relative path
#[inline]
#[must_use]
pub fn should_include(entry: &FileEntry, config: &CollectorConfig) -> bool {
    let accepted = config.extensions.iter().any(|ext| *ext == entry.extension)
        || config.is_special_file(&entry.name);

    accepted
        && !config.exclude_files.iter().any(|name| *name == entry.name)
        && !is_excluded_path(&entry.relative_path, &config.exclude_dirs)
}

/// Plain, case-sensitive substring test: `redistribution/` is caught by
/// `dist` just like `dist/` is.
#[inline]
#[must_use]
pub fn is_excluded_path(relative: &Path, exclude_dirs: &[String]) -> bool {
    let path_str = relative.to_string_lossy();
    exclude_dirs
        .iter()
        .any(|fragment| path_str.contains(fragment.as_str()))
}
