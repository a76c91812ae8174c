//! The `quizdeck show` command.

use anyhow::Result;

use quizdeck_core::view::{topic_score_line, QuestionFeedback};

use crate::Locations;

pub async fn execute(locations: &Locations, slug: &str) -> Result<()> {
    let (source, mut session) = super::start_session(locations).await?;
    super::open_topic(&source, &mut session, slug).await?;

    let Some(topic) = session.current_topic() else {
        anyhow::bail!("no topic is open");
    };

    println!("{}", topic.display_name);
    println!(
        "{} question(s) in this topic. Answer all, then run `quizdeck check {}`.",
        topic.len(),
        topic.slug
    );

    for question in &topic.questions {
        println!();
        let selected = session.selected_label(question.id);
        super::print_question(question, selected);
        if selected.is_some() {
            super::print_feedback(&QuestionFeedback::new(question, selected));
        }
    }

    if let Some(score) = session.current_score() {
        println!();
        println!("{}", topic_score_line(&score));
    }
    Ok(())
}
