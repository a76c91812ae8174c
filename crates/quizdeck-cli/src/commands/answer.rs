//! The `quizdeck answer` command.

use anyhow::Result;

use quizdeck_core::view::topic_score_line;

use crate::Locations;

pub async fn execute(locations: &Locations, slug: &str, question: u32, label: &str) -> Result<()> {
    let (source, mut session) = super::start_session(locations).await?;
    super::open_topic(&source, &mut session, slug).await?;

    let feedback = session.select_answer(question, label)?;
    println!("Q{question}: selected {label}");
    super::print_feedback(&feedback);

    if let Some(score) = session.current_score() {
        println!("{}", topic_score_line(&score));
    }
    super::print_global(&session);
    Ok(())
}
