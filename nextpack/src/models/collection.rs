// src/models/collection.rs
use std::collections::BTreeMap;

use super::{Category, FileEntry, Stats};

/// Classified files grouped per category, plus the running counters.
///
/// Buckets are keyed by `Category`, so iteration follows declaration order
/// and only categories that received a file are present.
#[derive(Debug, Default)]
pub struct Collection {
    buckets: BTreeMap<Category, Vec<FileEntry>>,
    pub stats: Stats,
}

impl Collection {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, category: Category, entry: FileEntry) {
        self.buckets.entry(category).or_default().push(entry);
        self.stats.record_file();
    }

    #[inline]
    #[must_use]
    pub fn bucket(&self, category: Category) -> &[FileEntry] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Non-empty buckets in report order.
    #[inline]
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[FileEntry])> {
        self.buckets
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Orders every bucket by path depth, then by relative path.
    #[inline]
    pub fn sort(&mut self) {
        for entries in self.buckets.values_mut() {
            entries.sort_by_cached_key(|entry| (entry.depth(), entry.relative_str()));
        }
    }
}
