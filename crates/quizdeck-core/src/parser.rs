//! JSON catalog and topic parsing.
//!
//! Parsing is lenient per entry: a malformed catalog entry or question is
//! skipped with a warning so the rest of the quiz stays usable. Only a
//! document that is not JSON at all, or lacks its top-level list, fails.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::{Catalog, Question, Topic, TopicSummary};

/// Intermediate structure for the catalog document.
#[derive(Debug, Deserialize)]
struct JsonCatalog {
    topics: Vec<serde_json::Value>,
}

/// Intermediate structure for a topic document.
#[derive(Debug, Deserialize)]
struct JsonTopic {
    #[serde(default)]
    topic: Option<String>,
    questions: Vec<serde_json::Value>,
}

/// Parse a catalog document. `resource` names it in errors and logs.
pub fn parse_catalog_str(content: &str, resource: &str) -> Result<Catalog, LoadError> {
    let parsed: JsonCatalog = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        resource: resource.to_string(),
        message: e.to_string(),
    })?;

    let mut seen = HashSet::new();
    let mut topics = Vec::with_capacity(parsed.topics.len());
    for (index, value) in parsed.topics.into_iter().enumerate() {
        let summary = match serde_json::from_value::<TopicSummary>(value) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("{resource}: skipping catalog entry #{index}: {e}");
                continue;
            }
        };
        if !seen.insert(summary.slug.clone()) {
            tracing::warn!("{resource}: skipping duplicate slug '{}'", summary.slug);
            continue;
        }
        topics.push(summary);
    }

    Ok(Catalog { topics })
}

/// Parse a topic document for the given catalog entry.
pub fn parse_topic_str(
    summary: &TopicSummary,
    content: &str,
    resource: &str,
) -> Result<Topic, LoadError> {
    let parsed: JsonTopic = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        resource: resource.to_string(),
        message: e.to_string(),
    })?;

    let mut seen_ids = HashSet::new();
    let mut questions = Vec::with_capacity(parsed.questions.len());
    for (index, value) in parsed.questions.into_iter().enumerate() {
        let mut question = match serde_json::from_value::<Question>(value) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!("{resource}: skipping question #{index}: {e}");
                continue;
            }
        };
        if let Err(reason) = check_question(&question) {
            tracing::warn!("{resource}: skipping question {}: {reason}", question.id);
            continue;
        }
        if !seen_ids.insert(question.id) {
            tracing::warn!("{resource}: skipping duplicate question id {}", question.id);
            continue;
        }
        if question.explanation.as_deref() == Some("") {
            question.explanation = None;
        }
        questions.push(question);
    }

    let display_name = parsed
        .topic
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| summary.display_name.clone());

    Ok(Topic {
        slug: summary.slug.clone(),
        display_name,
        questions,
    })
}

fn check_question(question: &Question) -> Result<(), String> {
    if question.options.is_empty() {
        return Err("no options".into());
    }
    let mut labels = HashSet::new();
    for option in &question.options {
        if option.label.is_empty() {
            return Err("option with empty label".into());
        }
        if !labels.insert(option.label.as_str()) {
            return Err(format!("duplicate option label '{}'", option.label));
        }
    }
    if !labels.contains(question.correct.as_str()) {
        return Err(format!(
            "correct answer '{}' matches no option",
            question.correct
        ));
    }
    Ok(())
}

/// A warning from catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The topic slug (if applicable).
    pub slug: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog against its loaded topics for common issues.
pub fn validate_catalog(catalog: &Catalog, topics: &[Topic]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.topics.is_empty() {
        warnings.push(ValidationWarning {
            slug: None,
            message: "catalog lists no topics".into(),
        });
    }

    for topic in topics {
        let Some(summary) = catalog.get(&topic.slug) else {
            continue;
        };

        if topic.is_empty() {
            warnings.push(ValidationWarning {
                slug: Some(topic.slug.clone()),
                message: "topic has no usable questions".into(),
            });
        } else if topic.len() != summary.declared_questions {
            warnings.push(ValidationWarning {
                slug: Some(topic.slug.clone()),
                message: format!(
                    "catalog declares {} question(s) but {} loaded",
                    summary.declared_questions,
                    topic.len()
                ),
            });
        }

        let unexplained = topic
            .questions
            .iter()
            .filter(|q| q.explanation.is_none())
            .count();
        if unexplained > 0 {
            warnings.push(ValidationWarning {
                slug: Some(topic.slug.clone()),
                message: format!("{unexplained} question(s) without explanation"),
            });
        }
    }

    warnings
}
