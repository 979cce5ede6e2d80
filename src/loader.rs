//! Resolves command names to parsed documents, memoizing through the cache.

use crate::cache::DocumentCache;
use crate::document::{Document, read_document};
use crate::store::{Store, document_key};
use tracing::debug;

/// Owns the store handle and the per-run document cache.
#[derive(Debug)]
pub struct Loader {
    store: Store,
    cache: DocumentCache,
}

impl Loader {
    pub fn new(store: Store) -> Self {
        Self::with_cache(store, DocumentCache::default())
    }

    pub fn with_cache(store: Store, cache: DocumentCache) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Look up the document for `command`.
    ///
    /// Returns `None` when no backing file exists, and also when the file
    /// cannot be read or decoded; in the latter case the failure is reported
    /// on stderr with the file path. Neither outcome is cached.
    pub fn load(&mut self, command: &str) -> Option<&Document> {
        let key = document_key(command);
        if self.cache.contains(&key) {
            debug!(command = %key, "cache hit");
            return self.cache.get(&key);
        }

        let Some(path) = self.store.document_path(command) else {
            debug!(command = %key, "no store directory");
            return None;
        };
        debug!(command = %key, path = %path.display(), "cache miss");
        match read_document(&path) {
            Ok(Some(document)) => Some(self.cache.insert(key, document)),
            Ok(None) => None,
            Err(err) => {
                eprintln!("Error al cargar {}: {}", path.display(), err.root_cause());
                None
            }
        }
    }
}
