//! Seams to the outside world: where quiz resources come from and where
//! progress is kept.
//!
//! Implementations live in `quizdeck-store`.

use async_trait::async_trait;

use crate::error::{LoadError, StorageError};
use crate::model::{Catalog, Topic, TopicSummary};

// ---------------------------------------------------------------------------
// Quiz source
// ---------------------------------------------------------------------------

/// Supplies the catalog and topic documents.
///
/// Loads are asynchronous; the session treats a completed load as a single
/// event and ignores it if a newer selection has been made since.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Human-readable source name, used in logs.
    fn name(&self) -> &str;

    /// Load the topic catalog.
    async fn load_catalog(&self) -> Result<Catalog, LoadError>;

    /// Load the questions for one catalog entry.
    async fn load_topic(&self, summary: &TopicSummary) -> Result<Topic, LoadError>;
}

// ---------------------------------------------------------------------------
// Durable store
// ---------------------------------------------------------------------------

/// A persistent key-value byte store scoped to one user.
pub trait DurableStore {
    /// Read the bytes stored under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrite the bytes stored under `key`.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<S: DurableStore + ?Sized> DurableStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, bytes)
    }
}

impl<S: DurableStore + ?Sized> DurableStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, bytes)
    }
}
