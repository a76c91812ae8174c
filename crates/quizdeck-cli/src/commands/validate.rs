//! The `quizdeck validate` command.

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};

use quizdeck_core::parser::validate_catalog;
use quizdeck_core::traits::QuizSource;
use quizdeck_store::DirectorySource;

use crate::Locations;

pub async fn execute(locations: &Locations) -> Result<()> {
    let config = super::resolve_config(locations)?;
    let source = DirectorySource::new(&config.data_dir);
    let catalog = source.load_catalog().await?;

    let mut pending: FuturesUnordered<_> = catalog
        .topics
        .iter()
        .map(|summary| {
            let source = &source;
            async move { (summary, source.load_topic(summary).await) }
        })
        .collect();

    let mut topics = Vec::new();
    let mut failures = Vec::new();
    while let Some((summary, result)) = pending.next().await {
        match result {
            Ok(topic) => topics.push(topic),
            Err(e) => failures.push(format!("{}: {e}", summary.slug)),
        }
    }
    drop(pending);

    // Report in catalog order, not completion order.
    let order: Vec<&str> = catalog.sorted().iter().map(|s| s.slug.as_str()).collect();
    topics.sort_by_key(|t| order.iter().position(|slug| *slug == t.slug));

    for topic in &topics {
        println!("Topic: {} ({} questions)", topic.display_name, topic.len());
    }

    let warnings = validate_catalog(&catalog, &topics);
    for w in &warnings {
        let prefix = w
            .slug
            .as_ref()
            .map(|slug| format!("  [{slug}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    for failure in &failures {
        println!("  ERROR: {failure}");
    }

    if !failures.is_empty() {
        anyhow::bail!("{} topic(s) failed to load", failures.len());
    }

    if warnings.is_empty() {
        println!("All topics valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
