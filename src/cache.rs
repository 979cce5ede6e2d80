//! Bounded in-memory cache of parsed cheat sheets.
//!
//! Eviction is first-in-first-out: when the cache is full the entry inserted
//! earliest is dropped, regardless of how recently it was read. Lookups do
//! not reorder entries.

use crate::document::Document;
use indexmap::IndexMap;
use tracing::debug;

pub const DEFAULT_CACHE_CAPACITY: usize = 10;

#[derive(Debug)]
pub struct DocumentCache {
    capacity: usize,
    entries: IndexMap<String, Document>,
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl DocumentCache {
    /// Capacity is clamped to at least one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries.get(key)
    }

    /// Store `document` under `key`, evicting the oldest insertion if full.
    ///
    /// Replacing an existing key keeps its original insertion slot.
    pub fn insert(&mut self, key: String, document: Document) -> &Document {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                debug!(command = %evicted, "evicting cached document");
            }
        }
        let (index, _) = self.entries.insert_full(key, document);
        &self.entries[index]
    }

    /// Cached keys, oldest insertion first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
