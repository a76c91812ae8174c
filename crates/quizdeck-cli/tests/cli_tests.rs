//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATA_DIR: &str = "../../quiz-data";
const STATE_FILE: &str = "quizdeck_state_v1.json";

fn quizdeck(state: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizdeck").unwrap();
    cmd.env("HOME", state)
        .env_remove("QUIZDECK_DATA_DIR")
        .env_remove("QUIZDECK_STATE_DIR")
        .arg("--data-dir")
        .arg(DATA_DIR)
        .arg("--state-dir")
        .arg(state);
    cmd
}

fn read_state(state: &Path) -> serde_json::Value {
    let bytes = std::fs::read(state.join(STATE_FILE)).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn topics_lists_catalog_in_numeric_order() {
    let state = TempDir::new().unwrap();
    let output = quizdeck(state.path()).arg("topics").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let anatomy = stdout.find("1 Equine Anatomy").unwrap();
    let hooves = stdout.find("2 Hoof Care").unwrap();
    let nutrition = stdout.find("10 Nutrition").unwrap();
    assert!(anatomy < hooves && hooves < nutrition);

    assert!(stdout.contains("0/3"));
    assert!(stdout.contains("Total score: 0 / 12"));
    assert!(stdout.contains("Unanswered: 12"));
}

#[test]
fn answer_updates_topic_and_global_score() {
    let state = TempDir::new().unwrap();

    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "1", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct"))
        .stdout(predicate::str::contains(
            "Topic score: 1 / 3 (Unanswered: 2)",
        ))
        .stdout(predicate::str::contains("Total score: 1 / 12"))
        .stdout(predicate::str::contains("Unanswered: 11"));

    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "2", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect"))
        .stdout(predicate::str::contains("Correct answer: C"))
        .stdout(predicate::str::contains(
            "Tendons attach muscle to bone",
        ));

    let record = read_state(state.path());
    let entry = &record["topicState"]["equine-anatomy"];
    assert_eq!(entry["answers"]["1"], "A");
    assert_eq!(entry["answers"]["2"], "A");
    assert_eq!(entry["correct"], 1);
    assert_eq!(entry["total"], 3);
    assert_eq!(entry["unanswered"], 1);
    assert_eq!(entry["completed"], false);
    assert_eq!(record["globalTotalQuestions"], 12);
}

#[test]
fn changing_an_answer_replaces_the_selection() {
    let state = TempDir::new().unwrap();

    quizdeck(state.path())
        .args(["answer", "hoof-care", "5", "A"])
        .assert()
        .success();
    quizdeck(state.path())
        .args(["answer", "hoof-care", "5", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic score: 1 / 4"));

    let record = read_state(state.path());
    assert_eq!(record["topicState"]["hoof-care"]["answers"]["5"], "C");
}

#[test]
fn show_marks_selection_and_feedback() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "3", "B"])
        .assert()
        .success();

    quizdeck(state.path())
        .args(["show", "equine-anatomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Equine Anatomy"))
        .stdout(predicate::str::contains("[x] B. At the highest point"))
        .stdout(predicate::str::contains("[ ] A. About 205"))
        .stdout(predicate::str::contains(
            "Topic score: 1 / 3 (Unanswered: 2)",
        ));
}

#[test]
fn check_marks_topic_completed() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "1", "A"])
        .assert()
        .success();

    quizdeck(state.path())
        .args(["check", "equine-anatomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No answer selected"))
        .stdout(predicate::str::contains(
            "Topic score: 1 / 3 (Unanswered: 2)",
        ))
        .stdout(predicate::str::contains("Correct: 33%"))
        .stdout(predicate::str::contains(
            "Answers checked. See per-question feedback above.",
        ));

    let record = read_state(state.path());
    assert_eq!(record["topicState"]["equine-anatomy"]["completed"], true);

    quizdeck(state.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));
}

#[test]
fn reset_requires_confirmation() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .args(["answer", "nutrition", "1", "B"])
        .assert()
        .success();

    quizdeck(state.path())
        .args(["reset", "nutrition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset answers for this topic?"))
        .stdout(predicate::str::contains("\"10 Nutrition\""))
        .stdout(predicate::str::contains("--yes"));

    let record = read_state(state.path());
    assert_eq!(record["topicState"]["nutrition"]["answers"]["1"], "B");

    quizdeck(state.path())
        .args(["reset", "nutrition", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Topic score: 0 / 5 (Unanswered: 5)",
        ))
        .stdout(predicate::str::contains("Total score: 0 / 12"));

    let record = read_state(state.path());
    let entry = &record["topicState"]["nutrition"];
    assert_eq!(entry["answers"], serde_json::json!({}));
    assert_eq!(entry["completed"], false);
}

#[test]
fn stats_reports_last_saved() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total score: 0 / 12"))
        .stdout(predicate::str::contains("No saved progress yet."));

    quizdeck(state.path())
        .args(["answer", "hoof-care", "1", "B"])
        .assert()
        .success();

    quizdeck(state.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total score: 1 / 12"))
        .stdout(predicate::str::contains("Last saved:"));
}

#[test]
fn unknown_topic_fails() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .args(["show", "no-such-topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-topic"));
}

#[test]
fn invalid_option_is_rejected_and_not_saved() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "1", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    // Opening the topic saved its empty entry; the bad label was never stored.
    let record = read_state(state.path());
    assert_eq!(
        record["topicState"]["equine-anatomy"]["answers"],
        serde_json::json!({})
    );
}

#[test]
fn corrupt_state_starts_fresh() {
    let state = TempDir::new().unwrap();
    std::fs::write(state.path().join(STATE_FILE), "{not json").unwrap();

    quizdeck(state.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total score: 0 / 12"));

    quizdeck(state.path())
        .args(["answer", "equine-anatomy", "1", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total score: 1 / 12"));

    let record = read_state(state.path());
    assert_eq!(record["topicState"]["equine-anatomy"]["answers"]["1"], "A");
}

#[test]
fn missing_data_dir_fails() {
    let state = TempDir::new().unwrap();
    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .env("HOME", state.path())
        .arg("--data-dir")
        .arg(state.path().join("missing"))
        .arg("--state-dir")
        .arg(state.path())
        .arg("topics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load topics"));
}

#[test]
fn validate_sample_data() {
    let state = TempDir::new().unwrap();
    quizdeck(state.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic: 1 Equine Anatomy (3 questions)"))
        .stdout(predicate::str::contains("Topic: 10 Nutrition (5 questions)"))
        .stdout(predicate::str::contains(
            "[equine-anatomy] WARNING: 1 question(s) without explanation",
        ));
}

#[test]
fn validate_reports_missing_topic_file() {
    let data = TempDir::new().unwrap();
    std::fs::write(
        data.path().join("index.json"),
        r#"{"topics": [{"topic": "Gone", "slug": "gone", "file": "gone.json", "numQuestions": 2}]}"#,
    )
    .unwrap();

    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .env("HOME", data.path())
        .arg("--data-dir")
        .arg(data.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: gone"))
        .stderr(predicate::str::contains("1 topic(s) failed to load"));
}

#[test]
fn init_creates_files_then_skips() {
    let dir = TempDir::new().unwrap();

    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdeck.toml"));

    assert!(dir.path().join("quizdeck.toml").exists());
    assert!(dir.path().join("quiz-data/index.json").exists());
    assert!(dir.path().join("quiz-data/example.json").exists());

    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));

    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All topics valid."));
}

#[test]
fn no_args_shows_help() {
    #[allow(deprecated)]
    Command::cargo_bin("quizdeck")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
