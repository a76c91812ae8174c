//! Session controller.
//!
//! A `Session` is the explicit context for one user's quiz run: it owns the
//! catalog, the progress store, the persistence gateway and the current topic
//! selection. Presentation layers feed it discrete events (select topic,
//! topic loaded, select answer, check all, reset) and render what it returns.
//!
//! Every mutating event recomputes the open topic's counts and saves before
//! returning. Save failures are logged and counted, never propagated.

use chrono::{DateTime, Utc};

use crate::aggregate::{compute_global_stats, GlobalStats};
use crate::error::{LoadError, SessionError};
use crate::model::{Catalog, QuestionId, Topic, TopicSummary};
use crate::persistence::Persistence;
use crate::progress::ProgressStore;
use crate::scoring::TopicScore;
use crate::view::{topic_lines, QuestionFeedback, TopicLine, TopicReport};

/// Identifies one topic selection. Newer selections compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(u64);

/// A pending topic selection: the token to hand back with the loaded topic,
/// and the catalog entry to load.
#[derive(Debug, Clone)]
pub struct Selection {
    pub token: SelectionToken,
    pub summary: TopicSummary,
}

/// What happened to a delivered topic load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicLoad {
    /// The topic is now open.
    Applied,
    /// A newer selection was made while this one loaded; nothing changed.
    Stale,
}

pub struct Session {
    catalog: Catalog,
    progress: ProgressStore,
    persistence: Persistence,
    latest: u64,
    /// Slug of the selection `latest` was issued for.
    selected: Option<String>,
    current: Option<Topic>,
    last_saved: Option<DateTime<Utc>>,
    save_failures: u32,
}

impl Session {
    /// Start a session, restoring whatever progress the store holds.
    pub fn start(catalog: Catalog, persistence: Persistence) -> Self {
        let mut progress = ProgressStore::new();
        let mut last_saved = None;
        match persistence.load() {
            Ok(stored) => {
                last_saved = stored.saved_at;
                let kept = progress.restore(stored.topics);
                tracing::debug!("restored progress for {kept} topic(s)");
            }
            Err(e) => {
                tracing::warn!("could not read stored progress, starting empty: {e}");
            }
        }

        Self {
            catalog,
            progress,
            persistence,
            latest: 0,
            selected: None,
            current: None,
            last_saved,
            save_failures: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// The topic currently on screen, if any.
    pub fn current_topic(&self) -> Option<&Topic> {
        self.current.as_ref()
    }

    /// When progress was last written, by this session or a previous one.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Number of saves that failed during this session.
    pub fn save_failures(&self) -> u32 {
        self.save_failures
    }

    /// Begin selecting a topic. The returned token must accompany the
    /// loaded topic; only the most recent selection's load is applied.
    pub fn select_topic(&mut self, slug: &str) -> Result<Selection, SessionError> {
        let summary = self
            .catalog
            .get(slug)
            .cloned()
            .ok_or_else(|| SessionError::UnknownTopic(slug.to_string()))?;
        self.latest += 1;
        self.selected = Some(summary.slug.clone());
        Ok(Selection {
            token: SelectionToken(self.latest),
            summary,
        })
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        token.0 == self.latest
    }

    /// Deliver a loaded topic for a selection.
    ///
    /// Progress is keyed by the selected catalog slug, whatever slug the
    /// source put on the topic.
    pub fn apply_topic(&mut self, token: SelectionToken, mut topic: Topic) -> TopicLoad {
        if !self.is_current(token) {
            tracing::debug!("discarding stale load of '{}'", topic.slug);
            return TopicLoad::Stale;
        }
        if let Some(selected) = &self.selected {
            if topic.slug != *selected {
                tracing::warn!(
                    "source returned topic '{}' for selection '{selected}'",
                    topic.slug
                );
                topic.slug = selected.clone();
            }
        }

        let slug = topic.slug.clone();
        self.progress.get_or_create(&slug, topic.len());
        self.progress.recompute(&slug, &topic);
        tracing::info!("opened topic '{}' ({} questions)", slug, topic.len());
        self.current = Some(topic);
        self.persist();
        TopicLoad::Applied
    }

    /// Deliver a failed load for a selection.
    ///
    /// Returns the status message to show, or `None` if the selection is
    /// stale. The displayed topic is left as it was.
    pub fn apply_load_failure(
        &mut self,
        token: SelectionToken,
        error: &LoadError,
    ) -> Option<String> {
        if !self.is_current(token) {
            return None;
        }
        tracing::warn!("topic load failed: {error}");
        Some(error.status_message())
    }

    /// Select `label` for a question of the open topic.
    pub fn select_answer(
        &mut self,
        question_id: QuestionId,
        label: &str,
    ) -> Result<QuestionFeedback, SessionError> {
        let topic = self.current.as_ref().ok_or(SessionError::NoTopicOpen)?;
        let question = topic
            .question(question_id)
            .ok_or(SessionError::UnknownQuestion(question_id))?;
        if !question.has_option(label) {
            return Err(SessionError::UnknownOption {
                question_id,
                label: label.to_string(),
            });
        }

        self.progress.record_answer(&topic.slug, question_id, label);
        self.progress.recompute(&topic.slug, topic);
        let feedback = QuestionFeedback::new(question, Some(label));
        self.persist();
        Ok(feedback)
    }

    /// Evaluate every question of the open topic and mark it completed.
    pub fn check_all(&mut self) -> Result<TopicReport, SessionError> {
        let topic = self.current.as_ref().ok_or(SessionError::NoTopicOpen)?;

        self.progress.recompute(&topic.slug, topic);
        self.progress.mark_completed(&topic.slug);

        let answers = self.progress.get(&topic.slug).map(|p| &p.answers);
        let feedback = topic
            .questions
            .iter()
            .map(|q| {
                let selected = answers.and_then(|a| a.get(&q.id)).map(String::as_str);
                QuestionFeedback::new(q, selected)
            })
            .collect();
        let report = TopicReport {
            slug: topic.slug.clone(),
            feedback,
            score: self.current_score().unwrap_or_default(),
        };

        self.persist();
        Ok(report)
    }

    /// Clear all answers and the completed mark for the open topic.
    pub fn reset_topic(&mut self) -> Result<(), SessionError> {
        let topic = self.current.as_ref().ok_or(SessionError::NoTopicOpen)?;
        self.progress.reset(&topic.slug, topic.len());
        tracing::info!("reset topic '{}'", topic.slug);
        self.persist();
        Ok(())
    }

    /// Counts for the open topic.
    pub fn current_score(&self) -> Option<TopicScore> {
        let topic = self.current.as_ref()?;
        let entry = self.progress.get(&topic.slug)?;
        Some(TopicScore {
            correct_count: entry.correct_count,
            unanswered_count: entry.unanswered_count,
            total_count: entry.total_count,
        })
    }

    /// The stored selection for a question of the open topic.
    pub fn selected_label(&self, question_id: QuestionId) -> Option<&str> {
        let topic = self.current.as_ref()?;
        self.progress
            .get(&topic.slug)?
            .answers
            .get(&question_id)
            .map(String::as_str)
    }

    /// Feedback for every answered question of the open topic, in order.
    pub fn answered_feedback(&self) -> Vec<QuestionFeedback> {
        let Some(topic) = self.current.as_ref() else {
            return Vec::new();
        };
        topic
            .questions
            .iter()
            .filter_map(|q| {
                self.selected_label(q.id)
                    .map(|label| QuestionFeedback::new(q, Some(label)))
            })
            .collect()
    }

    pub fn global_stats(&self) -> GlobalStats {
        compute_global_stats(&self.catalog, &self.progress)
    }

    pub fn topic_lines(&self) -> Vec<TopicLine> {
        topic_lines(&self.catalog, &self.progress)
    }

    fn persist(&mut self) {
        let global_total = self.catalog.declared_total();
        match self.persistence.save(self.progress.snapshot(), global_total) {
            Ok(()) => self.last_saved = Some(Utc::now()),
            Err(e) => {
                self.save_failures += 1;
                tracing::warn!("failed to save progress: {e}");
            }
        }
    }
}
