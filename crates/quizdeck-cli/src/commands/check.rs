//! The `quizdeck check` command.

use anyhow::Result;

use quizdeck_core::view::topic_score_line;

use crate::Locations;

pub async fn execute(locations: &Locations, slug: &str) -> Result<()> {
    let (source, mut session) = super::start_session(locations).await?;
    super::open_topic(&source, &mut session, slug).await?;

    let report = session.check_all()?;
    if let Some(topic) = session.current_topic() {
        for (question, feedback) in topic.questions.iter().zip(&report.feedback) {
            super::print_question(question, feedback.selected.as_deref());
            super::print_feedback(feedback);
            println!();
        }
    }

    println!("{}", topic_score_line(&report.score));
    println!("Correct: {:.0}%", report.score.percent());
    println!("Answers checked. See per-question feedback above.");
    super::print_global(&session);
    Ok(())
}
