//! In-memory progress store.
//!
//! Holds one `TopicProgress` per visited topic and is the only owner of those
//! records. Answer mutation and score recomputation are separate steps so a
//! caller can batch several answers before one recompute.

use std::collections::BTreeMap;

use crate::model::{QuestionId, Topic, TopicProgress};
use crate::scoring::evaluate_topic;

/// Progress entries as read back from storage, not yet validated.
pub type RawProgress = BTreeMap<String, serde_json::Value>;

/// Per-topic progress keyed by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    entries: BTreeMap<String, TopicProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<&TopicProgress> {
        self.entries.get(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entry for `slug`, creating an empty one if none exists.
    pub fn get_or_create(&mut self, slug: &str, total_hint: u32) -> &TopicProgress {
        self.entries
            .entry(slug.to_string())
            .or_insert_with(|| TopicProgress::empty(total_hint))
    }

    /// Store `label` as the answer to `question_id`. Counts are not updated.
    pub fn record_answer(&mut self, slug: &str, question_id: QuestionId, label: &str) {
        self.entries
            .entry(slug.to_string())
            .or_insert_with(|| TopicProgress::empty(0))
            .answers
            .insert(question_id, label.to_string());
    }

    /// Recompute the cached counts for `slug` against the loaded topic.
    pub fn recompute(&mut self, slug: &str, topic: &Topic) {
        let entry = self
            .entries
            .entry(slug.to_string())
            .or_insert_with(|| TopicProgress::empty(topic.len()));
        let score = evaluate_topic(topic, &entry.answers);
        entry.correct_count = score.correct_count;
        entry.unanswered_count = score.unanswered_count;
        entry.total_count = score.total_count;
    }

    pub fn mark_completed(&mut self, slug: &str) {
        if let Some(entry) = self.entries.get_mut(slug) {
            entry.completed = true;
        }
    }

    /// Replace the entry with an empty one sized to the loaded question count.
    pub fn reset(&mut self, slug: &str, total_count: u32) {
        self.entries
            .insert(slug.to_string(), TopicProgress::empty(total_count));
    }

    pub fn snapshot(&self) -> &BTreeMap<String, TopicProgress> {
        &self.entries
    }

    /// Replace all entries with restored ones.
    ///
    /// Entries without an `answers` mapping, or that otherwise fail to
    /// decode, are dropped. Returns the number of entries kept.
    pub fn restore(&mut self, raw: RawProgress) -> usize {
        self.entries.clear();
        for (slug, value) in raw {
            if !value.get("answers").is_some_and(|a| a.is_object()) {
                tracing::warn!("dropping stored progress for '{slug}': missing answers");
                continue;
            }
            match serde_json::from_value::<TopicProgress>(value) {
                Ok(progress) => {
                    self.entries.insert(slug, progress);
                }
                Err(e) => {
                    tracing::warn!("dropping stored progress for '{slug}': {e}");
                }
            }
        }
        self.entries.len()
    }
}
