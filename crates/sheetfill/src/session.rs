//! Session store
//!
//! Maps opaque session identifiers to filesystem paths at the boundary of the
//! engine. The store is owned by the embedding application and passed where
//! needed; there is no process-wide instance.
//!
//! Overwrite resolutions targeting the same path must not interleave, so the
//! store hands out one lock per distinct path; callers hold it across
//! [`resolve_output`](crate::output::resolve_output) calls with
//! `overwrite = true`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe map from session id to artifact path
#[derive(Debug, Default)]
pub struct SessionStore {
    paths: Mutex<HashMap<String, PathBuf>>,
    overwrite_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path under a session id, replacing any previous entry
    pub fn put<S: Into<String>, P: Into<PathBuf>>(&self, id: S, path: P) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), path.into());
    }

    /// Resolve a session id to its path
    pub fn get(&self, id: &str) -> Option<PathBuf> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Drop a session, returning its path if it existed
    pub fn remove(&self, id: &str) -> Option<PathBuf> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the store has no sessions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The serialization lock for overwrites of `path`
    ///
    /// All overwrite requests for the same path share one mutex; lock it for
    /// the duration of the overwrite. Entries whose lock is no longer held by
    /// any caller are dropped here, so the map does not grow with every path
    /// ever overwritten.
    pub fn overwrite_lock(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self
            .overwrite_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        locks.retain(|_, lock| Arc::strong_count(lock) > 1);

        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
