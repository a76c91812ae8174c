//! The `quizdeck topics` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::Locations;

pub async fn execute(locations: &Locations) -> Result<()> {
    let (_source, session) = super::start_session(locations).await?;

    let lines = session.topic_lines();
    if lines.is_empty() {
        println!("No topics in the catalog.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Topic", "Slug", "Score", "Done"]);
    for line in &lines {
        table.add_row(vec![
            line.display_name.clone(),
            line.slug.clone(),
            line.score_label(),
            (if line.completed { "✓" } else { "" }).to_string(),
        ]);
    }
    println!("{table}");
    println!();

    super::print_global(&session);
    Ok(())
}
