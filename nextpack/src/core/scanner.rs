// src/core/scanner.rs
mod filter;

pub use filter::{is_excluded_path, should_include};

use crate::config::CollectorConfig;
use crate::core::classifier::{Classification, classify, detect_render_mode};
use crate::models::{Collection, FileEntry};
use crate::utils::absolute_dir;
use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walks the configured root and classifies every included file.
///
/// # Arguments
///
/// * `config` - Root directory and inclusion settings
///
/// # Returns
///
/// * `Ok(Collection)` - Sorted buckets per category plus the counters
///
/// # Errors
///
/// This function may return an error if:
/// * The root directory cannot be resolved or does not exist
///
/// Entries that cannot be walked (permission errors, symlink loops) and files
/// that cannot be read are logged and skipped.
#[inline]
pub fn collect(config: &CollectorConfig) -> Result<Collection> {
    let root = absolute_dir(&config.root)?;
    if !root.is_dir() {
        bail!("Directory not found: {}", root.display());
    }

    let output_path = root.join(&config.output);
    let mut collection = Collection::new();

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            e.path()
                .strip_prefix(&root)
                .is_ok_and(|relative| !is_excluded_path(relative, &config.exclude_dirs))
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.path() == output_path {
            continue;
        }

        let Some(file) = FileEntry::new(&root, entry.path()) else {
            continue;
        };

        if should_include(&file, config) {
            record(&mut collection, file, config);
        } else {
            debug!(path = %file.relative_path.display(), "not included");
        }
    }

    collection.sort();
    Ok(collection)
}

fn record(collection: &mut Collection, file: FileEntry, config: &CollectorConfig) {
    if let Some(mode) = detect_render_mode(&file) {
        collection.stats.record_render_mode(mode);
    }

    let Classification { category, counter } = classify(&file, config);
    if let Some(counter) = counter {
        collection.stats.bump(counter);
    }

    debug!(path = %file.relative_path.display(), %category, "classified");
    collection.push(category, file);
}
