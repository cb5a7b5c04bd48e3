//! Device-local blob storage
//!
//! Small key/value persistence for the cart and session blobs, the
//! local-storage analogue of a browser client. Writes are synchronous
//! and best-effort: a failed write is logged and the in-memory state
//! stays authoritative for the rest of the session.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key/value blob store
pub trait BlobStorage: Send + Sync {
    /// Load a blob, `None` when absent or unreadable
    fn load(&self, key: &str) -> Option<String>;
    /// Persist a blob, best-effort
    fn store(&self, key: &str, value: &str);
    /// Drop a blob, best-effort
    fn remove(&self, key: &str);
}

/// One JSON file per key under a directory
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn store(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(key = %key, error = %e, "Failed to create storage directory");
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            tracing::warn!(key = %key, error = %e, "Failed to persist blob");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists()
            && let Err(e) = fs::remove_file(&path)
        {
            tracing::warn!(key = %key, error = %e, "Failed to remove blob");
        }
    }
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.lock().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.blobs.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.blobs.lock().remove(key);
    }
}
