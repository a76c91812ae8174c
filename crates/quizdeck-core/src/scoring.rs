//! Stateless scoring of questions and topics.
//!
//! An absent or empty selection is a valid input that counts as unanswered.
//! Label comparison is exact: case-sensitive and untrimmed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionId, Topic};

/// Result of scoring a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub is_correct: bool,
    pub is_unanswered: bool,
}

/// Aggregate counts for one topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub correct_count: u32,
    pub unanswered_count: u32,
    pub total_count: u32,
}

impl TopicScore {
    pub fn incorrect_count(&self) -> u32 {
        self.total_count
            .saturating_sub(self.correct_count)
            .saturating_sub(self.unanswered_count)
    }

    /// Share of correct answers in percent, 0 for an empty topic.
    pub fn percent(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.correct_count as f64 / self.total_count as f64 * 100.0
    }
}

/// Score one question against a selected label.
pub fn evaluate_question(question: &Question, selected: Option<&str>) -> QuestionOutcome {
    match selected {
        None | Some("") => QuestionOutcome {
            is_correct: false,
            is_unanswered: true,
        },
        Some(label) => QuestionOutcome {
            is_correct: label == question.correct,
            is_unanswered: false,
        },
    }
}

/// Score every question of a topic against an answer mapping.
///
/// Answers for ids the topic does not contain are ignored.
pub fn evaluate_topic(topic: &Topic, answers: &BTreeMap<QuestionId, String>) -> TopicScore {
    let mut score = TopicScore {
        total_count: topic.len(),
        ..TopicScore::default()
    };

    for question in &topic.questions {
        let outcome = evaluate_question(question, answers.get(&question.id).map(String::as_str));
        if outcome.is_unanswered {
            score.unanswered_count += 1;
        } else if outcome.is_correct {
            score.correct_count += 1;
        }
    }

    score
}
