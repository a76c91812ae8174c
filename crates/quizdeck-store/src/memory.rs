//! In-memory durable store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use quizdeck_core::error::StorageError;
use quizdeck_core::traits::DurableStore;

/// A `DurableStore` backed by a map.
///
/// Reads and writes can be switched to fail to exercise the best-effort
/// persistence paths.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `bytes` under `key`.
    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::default();
        store.lock().insert(key.to_string(), bytes.into());
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> u32 {
        self.write_count.load(Ordering::Relaxed)
    }

    /// A copy of the bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable("memory store reads disabled".into()));
        }
        Ok(self.lock().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable("memory store quota exceeded".into()));
        }
        self.lock().insert(key.to_string(), bytes.to_vec());
        self.write_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
