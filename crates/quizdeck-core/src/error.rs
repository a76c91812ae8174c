//! Error types for the quiz state engine.
//!
//! Load and storage failures are typed so the session can decide which ones
//! reach the user (load failures) and which ones are only logged (storage).

use thiserror::Error;

use crate::model::QuestionId;

/// A catalog or topic resource could not be read or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be read.
    #[error("failed to read {resource}: {message}")]
    Io { resource: String, message: String },

    /// The resource was read but is not a valid document.
    #[error("failed to parse {resource}: {message}")]
    Parse { resource: String, message: String },

    /// The catalog has no topic with this slug.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

impl LoadError {
    /// The status line shown to the user in place of the topic body.
    pub fn status_message(&self) -> String {
        match self {
            LoadError::UnknownTopic(slug) => format!("No topic named \"{slug}\" in the catalog."),
            _ => "Could not load this topic. Check the logs for details.".to_string(),
        }
    }
}

/// The durable store could not be read or written.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store refused the operation (quota exceeded, disabled, read-only).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// An I/O error from the backing medium.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The progress record could not be encoded.
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Misuse of the session API by a presentation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no topic is open")]
    NoTopicOpen,

    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("topic has no question {0}")]
    UnknownQuestion(QuestionId),

    #[error("question {question_id} has no option \"{label}\"")]
    UnknownOption {
        question_id: QuestionId,
        label: String,
    },
}
