//! The `quizdeck reset` command.

use anyhow::Result;

use quizdeck_core::view::topic_score_line;

use crate::Locations;

pub async fn execute(locations: &Locations, slug: &str, yes: bool) -> Result<()> {
    let (source, mut session) = super::start_session(locations).await?;
    super::open_topic(&source, &mut session, slug).await?;

    let name = session
        .current_topic()
        .map(|t| t.display_name.clone())
        .unwrap_or_else(|| "this topic".to_string());

    if !yes {
        println!("Reset answers for this topic?");
        println!(
            "You are about to clear all your selections and scores for \"{name}\" on this device. \
             This action cannot be undone."
        );
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    session.reset_topic()?;
    println!("Reset \"{name}\".");
    if let Some(score) = session.current_score() {
        println!("{}", topic_score_line(&score));
    }
    super::print_global(&session);
    Ok(())
}
