//! Core data model types for quizdeck.
//!
//! Catalog and topic types are immutable once loaded. `TopicProgress` is the
//! only mutable record and is owned by the progress store.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question identifier, unique within its topic.
pub type QuestionId = u32;

/// One entry of the topic catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    /// Stable unique identifier.
    pub slug: String,
    /// Human-readable topic name.
    #[serde(rename = "topic")]
    pub display_name: String,
    /// Locator of the topic's question file, relative to the catalog.
    pub file: String,
    /// Question count declared by the catalog. The loaded count wins once known.
    #[serde(rename = "numQuestions", default)]
    pub declared_questions: u32,
}

/// The set of available topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub topics: Vec<TopicSummary>,
}

impl Catalog {
    pub fn new(topics: Vec<TopicSummary>) -> Self {
        Self { topics }
    }

    /// Look up a topic by slug.
    pub fn get(&self, slug: &str) -> Option<&TopicSummary> {
        self.topics.iter().find(|t| t.slug == slug)
    }

    /// Sum of declared question counts across all topics, saturating at
    /// `u32::MAX`.
    pub fn declared_total(&self) -> u32 {
        self.topics
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(t.declared_questions))
    }

    /// Topics in display order.
    ///
    /// Names starting with a number come first, ordered numerically ("2 Hooves"
    /// before "10 Teeth"); the rest follow in name order.
    pub fn sorted(&self) -> Vec<&TopicSummary> {
        let mut topics: Vec<&TopicSummary> = self.topics.iter().collect();
        topics.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
        topics
    }
}

fn leading_number(name: &str) -> Option<u64> {
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn compare_display_names(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub stem: String,
    pub options: Vec<AnswerOption>,
    /// Label of the single correct option.
    pub correct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }
}

/// A loaded question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub slug: String,
    pub display_name: String,
    pub questions: Vec<Question>,
}

impl Topic {
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Actual number of loaded questions.
    pub fn len(&self) -> u32 {
        self.questions.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A user's answers and cached score for one topic.
///
/// The counts are derived from `answers` by the scoring engine. They are
/// current for the open topic and cached for every other topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicProgress {
    /// Chosen label per answered question. Unanswered questions are absent.
    pub answers: BTreeMap<QuestionId, String>,
    /// Set once a full evaluation pass has run; cleared only by reset.
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "correct", default)]
    pub correct_count: u32,
    #[serde(rename = "total", default)]
    pub total_count: u32,
    #[serde(rename = "unanswered", default)]
    pub unanswered_count: u32,
}

impl TopicProgress {
    /// A fresh entry where every question is unanswered.
    pub fn empty(total: u32) -> Self {
        Self {
            answers: BTreeMap::new(),
            completed: false,
            correct_count: 0,
            total_count: total,
            unanswered_count: total,
        }
    }

    pub fn incorrect_count(&self) -> u32 {
        self.total_count
            .saturating_sub(self.correct_count)
            .saturating_sub(self.unanswered_count)
    }

    /// Whether the topic has been loaded and scored at least once.
    pub fn is_scored(&self) -> bool {
        self.total_count > 0
    }
}
