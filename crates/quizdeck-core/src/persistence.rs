//! Persistence gateway between the progress store and a durable byte store.
//!
//! The whole store is written as one JSON record under a fixed key on every
//! save and read once at startup. Both directions return `Result` so callers
//! can observe failures, but nothing here ever panics on bad stored data:
//! an unreadable record loads as empty progress.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::model::TopicProgress;
use crate::progress::RawProgress;
use crate::traits::DurableStore;

/// Key the progress record is stored under unless configured otherwise.
pub const STORAGE_KEY: &str = "quizdeck_state_v1";

#[derive(Serialize)]
struct RecordOut<'a> {
    #[serde(rename = "topicState")]
    topic_state: &'a BTreeMap<String, TopicProgress>,
    #[serde(rename = "globalTotalQuestions")]
    global_total_questions: u32,
    #[serde(rename = "savedAt")]
    saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RecordIn {
    #[serde(rename = "topicState")]
    topic_state: RawProgress,
    #[serde(rename = "globalTotalQuestions", default)]
    global_total_questions: u32,
    #[serde(rename = "savedAt", default)]
    saved_at: Option<DateTime<Utc>>,
}

/// What a load recovered from the durable store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredProgress {
    /// Per-topic entries, validated later by `ProgressStore::restore`.
    pub topics: RawProgress,
    pub global_total_questions: u32,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Reads and writes the progress record.
pub struct Persistence {
    store: Box<dyn DurableStore>,
    key: String,
}

impl Persistence {
    pub fn new(store: Box<dyn DurableStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn DurableStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize and write the full snapshot.
    pub fn save(
        &self,
        snapshot: &BTreeMap<String, TopicProgress>,
        global_total: u32,
    ) -> Result<(), StorageError> {
        let record = RecordOut {
            topic_state: snapshot,
            global_total_questions: global_total,
            saved_at: Utc::now(),
        };
        let bytes = serde_json::to_vec(&record)?;
        self.store.put(&self.key, &bytes)?;
        tracing::debug!(
            "saved progress for {} topic(s) under '{}'",
            snapshot.len(),
            self.key
        );
        Ok(())
    }

    /// Read the stored record.
    ///
    /// A missing record or one that does not parse yields empty progress.
    /// Only a failing store read is reported as an error.
    pub fn load(&self) -> Result<StoredProgress, StorageError> {
        let Some(bytes) = self.store.get(&self.key)? else {
            tracing::debug!("no stored progress under '{}'", self.key);
            return Ok(StoredProgress::default());
        };

        match serde_json::from_slice::<RecordIn>(&bytes) {
            Ok(record) => Ok(StoredProgress {
                topics: record.topic_state,
                global_total_questions: record.global_total_questions,
                saved_at: record.saved_at,
            }),
            Err(e) => {
                tracing::warn!("ignoring unreadable progress under '{}': {e}", self.key);
                Ok(StoredProgress::default())
            }
        }
    }
}
