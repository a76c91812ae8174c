//! Subcommands and the plumbing they share: resolving locations, starting a
//! session, and opening a topic through the quiz source.

pub mod answer;
pub mod check;
pub mod init;
pub mod reset;
pub mod show;
pub mod stats;
pub mod topics;
pub mod validate;

use anyhow::{Context, Result};

use quizdeck_core::model::Question;
use quizdeck_core::persistence::Persistence;
use quizdeck_core::session::{Session, TopicLoad};
use quizdeck_core::traits::QuizSource;
use quizdeck_core::view::{FeedbackStatus, QuestionFeedback};
use quizdeck_store::config::{load_config_from, QuizdeckConfig};
use quizdeck_store::{DirectorySource, FileStore};

use crate::Locations;

/// Load the config file and apply command-line overrides.
pub fn resolve_config(locations: &Locations) -> Result<QuizdeckConfig> {
    let mut config = load_config_from(locations.config.as_deref())?;
    if let Some(dir) = &locations.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &locations.state_dir {
        config.state_dir = dir.clone();
    }
    Ok(config)
}

/// Load the catalog and restore saved progress.
pub async fn start_session(locations: &Locations) -> Result<(DirectorySource, Session)> {
    let config = resolve_config(locations)?;
    let source = DirectorySource::new(&config.data_dir);
    let catalog = source.load_catalog().await.with_context(|| {
        format!(
            "Could not load topics. Make sure {} exists",
            config.data_dir.join(quizdeck_store::CATALOG_FILE).display()
        )
    })?;
    tracing::debug!(
        "{} source at {} lists {} topic(s)",
        source.name(),
        source.root().display(),
        catalog.topics.len()
    );

    let store = FileStore::new(&config.state_dir);
    let persistence = Persistence::with_key(Box::new(store), config.storage_key.clone());
    Ok((source, Session::start(catalog, persistence)))
}

/// Select `slug`, load it, and hand the result to the session.
pub async fn open_topic(source: &DirectorySource, session: &mut Session, slug: &str) -> Result<()> {
    let selection = session.select_topic(slug)?;
    match source.load_topic(&selection.summary).await {
        Ok(topic) => match session.apply_topic(selection.token, topic) {
            TopicLoad::Applied => Ok(()),
            TopicLoad::Stale => anyhow::bail!("topic selection for '{slug}' was superseded"),
        },
        Err(e) => {
            let status = session
                .apply_load_failure(selection.token, &e)
                .unwrap_or_else(|| e.status_message());
            Err(anyhow::Error::new(e).context(status))
        }
    }
}

/// Print a question with its options, marking the current selection.
pub fn print_question(question: &Question, selected: Option<&str>) {
    println!("Q{}. {}", question.id, question.stem);
    for option in &question.options {
        let mark = if selected == Some(option.label.as_str()) {
            "[x]"
        } else {
            "[ ]"
        };
        println!("  {mark} {}. {}", option.label, option.text);
    }
}

/// Print the feedback block shown under a question.
pub fn print_feedback(feedback: &QuestionFeedback) {
    println!("  -> {}", feedback.status);
    if feedback.status != FeedbackStatus::Unanswered {
        println!("     Correct answer: {}", feedback.correct_label);
        if let Some(explanation) = &feedback.explanation {
            println!("     {explanation}");
        }
    }
}

/// Print the global summary lines.
pub fn print_global(session: &Session) {
    let stats = session.global_stats();
    println!("{}", stats.score_line());
    println!("{}", stats.unanswered_line());
}
