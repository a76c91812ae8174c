//! Global score across every catalog topic.

use serde::{Deserialize, Serialize};

use crate::model::Catalog;
use crate::progress::ProgressStore;

/// Totals shown in the global summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_correct: u32,
    pub total_unanswered: u32,
    /// Sum of declared question counts, the denominator of the global score.
    pub total_questions: u32,
}

/// Combine catalog metadata with stored progress.
///
/// Topics that were never loaded and scored count all of their declared
/// questions as unanswered. Always recomputed from scratch.
pub fn compute_global_stats(catalog: &Catalog, progress: &ProgressStore) -> GlobalStats {
    let mut stats = GlobalStats {
        total_questions: catalog.declared_total(),
        ..GlobalStats::default()
    };

    for summary in &catalog.topics {
        match progress.get(&summary.slug) {
            Some(entry) if entry.is_scored() => {
                stats.total_correct = stats.total_correct.saturating_add(entry.correct_count);
                stats.total_unanswered =
                    stats.total_unanswered.saturating_add(entry.unanswered_count);
            }
            _ => {
                stats.total_unanswered =
                    stats.total_unanswered.saturating_add(summary.declared_questions)
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicSummary;
    use crate::scoring::fixtures::topic;

    fn summary(slug: &str, n: u32) -> TopicSummary {
        TopicSummary {
            slug: slug.into(),
            display_name: slug.to_uppercase(),
            file: format!("{slug}.json"),
            declared_questions: n,
        }
    }

    #[test]
    fn unvisited_and_partially_answered_topics() {
        let catalog = Catalog::new(vec![summary("a", 5), summary("b", 4)]);
        let b = topic("b", &["A", "B", "C", "D"]);

        let mut progress = ProgressStore::new();
        progress.get_or_create("b", b.len());
        progress.record_answer("b", 1, "A");
        progress.record_answer("b", 2, "B");
        progress.recompute("b", &b);

        let stats = compute_global_stats(&catalog, &progress);
        assert_eq!(stats.total_correct, 2);
        assert_eq!(stats.total_unanswered, 7);
        assert_eq!(stats.total_questions, 9);
    }

    #[test]
    fn unscored_entry_counts_as_unvisited() {
        let catalog = Catalog::new(vec![summary("a", 5)]);
        let mut progress = ProgressStore::new();
        progress.record_answer("a", 1, "A");

        let stats = compute_global_stats(&catalog, &progress);
        assert_eq!(stats.total_correct, 0);
        assert_eq!(stats.total_unanswered, 5);
    }

    #[test]
    fn loaded_count_replaces_declared_hint() {
        let catalog = Catalog::new(vec![summary("a", 10)]);
        let a = topic("a", &["A", "B", "C"]);
        let mut progress = ProgressStore::new();
        progress.get_or_create("a", 10);
        progress.recompute("a", &a);

        let stats = compute_global_stats(&catalog, &progress);
        assert_eq!(stats.total_unanswered, 3);
        assert_eq!(stats.total_questions, 10);
    }

    #[test]
    fn progress_for_unknown_topics_is_ignored() {
        let catalog = Catalog::new(vec![summary("a", 2)]);
        let mut progress = ProgressStore::new();
        progress.get_or_create("removed", 6);

        let stats = compute_global_stats(&catalog, &progress);
        assert_eq!(stats.total_unanswered, 2);
    }

    #[test]
    fn huge_declared_counts_saturate() {
        let catalog = crate::parser::parse_catalog_str(
            r#"{"topics": [
                {"topic": "Big", "slug": "big", "file": "big.json", "numQuestions": 3000000000},
                {"topic": "Bigger", "slug": "bigger", "file": "bigger.json", "numQuestions": 3000000000}
            ]}"#,
            "index.json",
        )
        .unwrap();

        let stats = compute_global_stats(&catalog, &ProgressStore::new());
        assert_eq!(stats.total_questions, u32::MAX);
        assert_eq!(stats.total_unanswered, u32::MAX);
        assert_eq!(stats.total_correct, 0);
    }

    #[test]
    fn empty_catalog() {
        let stats = compute_global_stats(&Catalog::default(), &ProgressStore::new());
        assert_eq!(stats, GlobalStats::default());
    }
}
