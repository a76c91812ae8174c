//! The `quizdeck init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizdeck.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("quiz-data")?;
    write_if_missing(Path::new("quiz-data/index.json"), SAMPLE_CATALOG)?;
    write_if_missing(Path::new("quiz-data/example.json"), SAMPLE_TOPIC)?;

    println!("\nNext steps:");
    println!("  1. Add topic files under quiz-data/ and list them in index.json");
    println!("  2. Run: quizdeck validate");
    println!("  3. Run: quizdeck topics");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

data_dir = "./quiz-data"
state_dir = "${HOME}/.config/quizdeck/state"
storage_key = "quizdeck_state_v1"
"#;

const SAMPLE_CATALOG: &str = r#"{
  "topics": [
    {
      "topic": "1 Example",
      "slug": "example",
      "file": "example.json",
      "numQuestions": 2
    }
  ]
}
"#;

const SAMPLE_TOPIC: &str = r#"{
  "topic": "1 Example",
  "questions": [
    {
      "id": 1,
      "stem": "Which planet is closest to the sun?",
      "options": [
        { "label": "A", "text": "Venus" },
        { "label": "B", "text": "Mercury" },
        { "label": "C", "text": "Mars" }
      ],
      "correct": "B",
      "explanation": "Mercury orbits closest to the sun."
    },
    {
      "id": 2,
      "stem": "What is 7 x 6?",
      "options": [
        { "label": "A", "text": "42" },
        { "label": "B", "text": "36" },
        { "label": "C", "text": "48" }
      ],
      "correct": "A",
      "explanation": "7 x 6 = 42."
    }
  ]
}
"#;
