//! The `quizdeck stats` command.

use anyhow::Result;

use crate::Locations;

pub async fn execute(locations: &Locations) -> Result<()> {
    let (_source, session) = super::start_session(locations).await?;

    super::print_global(&session);
    match session.last_saved() {
        Some(at) => println!(
            "Last saved: {}",
            at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
        ),
        None => println!("No saved progress yet."),
    }
    Ok(())
}
