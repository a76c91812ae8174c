//! Session flows over the bundled sample data.
//!
//! These tests drive the session the way the commands do, but keep progress
//! in memory so a "reload" is just a second session over the same store.

use std::sync::Arc;

use quizdeck_core::persistence::{Persistence, STORAGE_KEY};
use quizdeck_core::session::{Session, TopicLoad};
use quizdeck_core::traits::QuizSource;
use quizdeck_core::view::FeedbackStatus;
use quizdeck_store::{DirectorySource, MemoryStore};

const DATA_DIR: &str = "../../quiz-data";

async fn start(store: &Arc<MemoryStore>) -> (DirectorySource, Session) {
    let source = DirectorySource::new(DATA_DIR);
    let catalog = source.load_catalog().await.unwrap();
    let persistence = Persistence::new(Box::new(Arc::clone(store)));
    (source, Session::start(catalog, persistence))
}

async fn open(source: &DirectorySource, session: &mut Session, slug: &str) {
    let selection = session.select_topic(slug).unwrap();
    let topic = source.load_topic(&selection.summary).await.unwrap();
    assert_eq!(session.apply_topic(selection.token, topic), TopicLoad::Applied);
}

#[tokio::test]
async fn progress_survives_a_reload() {
    let store = Arc::new(MemoryStore::new());

    {
        let (source, mut session) = start(&store).await;
        open(&source, &mut session, "hoof-care").await;
        for (id, label) in [(1, "B"), (2, "A"), (5, "C"), (7, "A")] {
            session.select_answer(id, label).unwrap();
        }
        let report = session.check_all().unwrap();
        assert_eq!(report.score.correct_count, 3);
        assert_eq!(report.score.unanswered_count, 0);
    }

    let (_source, session) = start(&store).await;
    assert!(session.last_saved().is_some());

    let entry = session.progress().get("hoof-care").unwrap();
    assert!(entry.completed);
    assert_eq!(entry.answers.get(&7).map(String::as_str), Some("A"));

    let stats = session.global_stats();
    assert_eq!(stats.total_correct, 3);
    assert_eq!(stats.total_unanswered, 8);
    assert_eq!(stats.total_questions, 12);

    let lines = session.topic_lines();
    let hoof = lines.iter().find(|l| l.slug == "hoof-care").unwrap();
    assert_eq!(hoof.score_label(), "3/4");
    assert!(hoof.completed);
}

#[tokio::test]
async fn switching_topics_keeps_each_topics_answers() {
    let store = Arc::new(MemoryStore::new());
    let (source, mut session) = start(&store).await;

    open(&source, &mut session, "equine-anatomy").await;
    session.select_answer(1, "A").unwrap();

    open(&source, &mut session, "nutrition").await;
    session.select_answer(3, "B").unwrap();
    assert_eq!(session.selected_label(1), None);

    open(&source, &mut session, "equine-anatomy").await;
    assert_eq!(session.selected_label(1), Some("A"));

    let feedback = session.answered_feedback();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].status, FeedbackStatus::Correct);

    let stats = session.global_stats();
    assert_eq!(stats.total_correct, 1);
    assert_eq!(stats.total_unanswered, 2 + 4 + 4);
}

#[tokio::test]
async fn failing_writes_do_not_interrupt_the_session() {
    let store = Arc::new(MemoryStore::new());
    store.set_fail_writes(true);

    let (source, mut session) = start(&store).await;
    open(&source, &mut session, "equine-anatomy").await;
    let feedback = session.select_answer(2, "C").unwrap();
    assert_eq!(feedback.status, FeedbackStatus::Correct);

    assert_eq!(session.save_failures(), 2);
    assert!(store.raw(STORAGE_KEY).is_none());
    assert_eq!(session.current_score().unwrap().correct_count, 1);
}

#[tokio::test]
async fn stored_entries_for_removed_topics_do_not_count() {
    let record = r#"{
        "topicState": {
            "retired-topic": {"answers": {"1": "A"}, "completed": true, "correct": 9, "total": 9, "unanswered": 0},
            "equine-anatomy": {"answers": {"1": "A"}, "completed": false, "correct": 1, "total": 3, "unanswered": 2}
        },
        "globalTotalQuestions": 21,
        "savedAt": "2026-01-05T10:00:00Z"
    }"#;
    let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, record));
    let (_source, session) = start(&store).await;

    let stats = session.global_stats();
    assert_eq!(stats.total_correct, 1);
    assert_eq!(stats.total_unanswered, 2 + 4 + 5);
    assert_eq!(stats.total_questions, 12);
}
