//! UI-facing summaries and per-question feedback.
//!
//! Everything here is derived from the catalog, the open topic and the
//! progress store; presentation layers render these values verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::GlobalStats;
use crate::model::{Catalog, Question, QuestionId};
use crate::progress::ProgressStore;
use crate::scoring::{evaluate_question, TopicScore};

/// Outcome of one question as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackStatus::Correct => write!(f, "Correct"),
            FeedbackStatus::Incorrect => write!(f, "Incorrect"),
            FeedbackStatus::Unanswered => write!(f, "No answer selected"),
        }
    }
}

/// Feedback block for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFeedback {
    pub question_id: QuestionId,
    pub status: FeedbackStatus,
    pub selected: Option<String>,
    pub correct_label: String,
    pub explanation: Option<String>,
}

impl QuestionFeedback {
    pub fn new(question: &Question, selected: Option<&str>) -> Self {
        let outcome = evaluate_question(question, selected);
        let status = if outcome.is_unanswered {
            FeedbackStatus::Unanswered
        } else if outcome.is_correct {
            FeedbackStatus::Correct
        } else {
            FeedbackStatus::Incorrect
        };
        Self {
            question_id: question.id,
            status,
            selected: selected.filter(|s| !s.is_empty()).map(str::to_string),
            correct_label: question.correct.clone(),
            explanation: question.explanation.clone(),
        }
    }
}

/// Result of a full evaluation pass over the open topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicReport {
    pub slug: String,
    pub feedback: Vec<QuestionFeedback>,
    pub score: TopicScore,
}

/// One row of the topic list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLine {
    pub slug: String,
    pub display_name: String,
    pub correct: u32,
    pub total: u32,
    pub completed: bool,
}

impl TopicLine {
    /// The `correct/total` badge.
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// Rows for every catalog topic in display order.
///
/// The total is the stored loaded count once the topic has been scored,
/// the catalog's declared count before that.
pub fn topic_lines(catalog: &Catalog, progress: &ProgressStore) -> Vec<TopicLine> {
    catalog
        .sorted()
        .into_iter()
        .map(|summary| {
            let entry = progress.get(&summary.slug);
            let total = entry
                .filter(|p| p.is_scored())
                .map(|p| p.total_count)
                .unwrap_or(summary.declared_questions);
            TopicLine {
                slug: summary.slug.clone(),
                display_name: summary.display_name.clone(),
                correct: entry.map(|p| p.correct_count).unwrap_or(0),
                total,
                completed: entry.is_some_and(|p| p.completed),
            }
        })
        .collect()
}

/// `Topic score: c / t`, with the unanswered count appended when nonzero.
pub fn topic_score_line(score: &TopicScore) -> String {
    let mut line = format!(
        "Topic score: {} / {}",
        score.correct_count, score.total_count
    );
    if score.unanswered_count > 0 {
        line.push_str(&format!(" (Unanswered: {})", score.unanswered_count));
    }
    line
}

impl GlobalStats {
    pub fn score_line(&self) -> String {
        format!(
            "Total score: {} / {}",
            self.total_correct, self.total_questions
        )
    }

    pub fn unanswered_line(&self) -> String {
        format!("Unanswered: {}", self.total_unanswered)
    }
}
