//! JSON payloads for the rendering layer.
//!
//! The UI binds to a flat summary object (stats panel, streak counter,
//! difficulty badge) rather than to the engine's internal structs, so the
//! shape is built here in one place. Also provides the snapshot round-trip
//! helpers the host uses to persist a session to local storage or a backend.

use serde_json::{json, Value};

use crate::adaptive_engine::models::{CategoryStat, DifficultyStat, PlayerPerformance};
use crate::adaptive_engine::recommender;
use crate::adaptive_engine::tracker::PerformanceTracker;

/// Accuracy as a percentage with one decimal, the way the stats panel shows it.
fn pct(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

fn category_entry(stat: &CategoryStat) -> Value {
    json!({
        "category": stat.category,
        "questions_answered": stat.questions_answered,
        "correct_answers": stat.correct_answers,
        "accuracy_pct": pct(stat.accuracy),
        "average_time_ms": stat.average_time_ms.round(),
        "suggested_difficulty": stat.suggested_difficulty.to_string(),
    })
}

fn difficulty_entry(stat: &DifficultyStat) -> Value {
    json!({
        "difficulty": stat.difficulty.to_string(),
        "questions_answered": stat.questions_answered,
        "correct_answers": stat.correct_answers,
        "accuracy_pct": pct(stat.accuracy),
        "average_time_ms": stat.average_time_ms.round(),
    })
}

/// Build the summary object the stats panel binds to.
///
/// Categories are sorted by name so the payload is deterministic regardless
/// of map iteration order.
pub fn performance_summary(tracker: &PerformanceTracker) -> Value {
    let perf = tracker.performance();

    let mut categories: Vec<&CategoryStat> = perf.category_performance.values().collect();
    categories.sort_by(|a, b| a.category.cmp(&b.category));

    json!({
        "total_questions": perf.total_questions,
        "correct_answers": perf.correct_answers,
        "accuracy_pct": pct(perf.overall_accuracy()),
        "recent_accuracy_pct": pct(perf.recent_accuracy()),
        "average_time_ms": perf.average_time_per_question.round(),
        "streak": perf.streak_count,
        "longest_streak": perf.longest_streak,
        "recommended_difficulty": recommender::recommended_difficulty(tracker, None).to_string(),
        "bonus_ready": recommender::should_offer_bonus_question(tracker),
        "categories": categories.iter().map(|s| category_entry(s)).collect::<Vec<_>>(),
        "difficulties": perf
            .difficulty_performance
            .iter()
            .map(difficulty_entry)
            .collect::<Vec<_>>(),
    })
}

/// Serialize a snapshot for the host's storage layer.
pub fn snapshot_json(perf: &PlayerPerformance) -> Value {
    serde_json::to_value(perf).unwrap_or(Value::Null)
}

/// Restore a snapshot previously produced by [`snapshot_json`].
///
/// Returns `None` on a malformed payload — the host falls back to a fresh
/// session rather than erroring.
pub fn performance_from_json(value: &Value) -> Option<PlayerPerformance> {
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive_engine::models::{DifficultyTier, OutcomeEvent};

    fn event(category: &str, correct: bool) -> OutcomeEvent {
        OutcomeEvent {
            question_id: "q".to_string(),
            category: category.to_string(),
            difficulty: DifficultyTier::Easy,
            correct,
            time_spent_ms: 1500,
            timestamp_ms: 0,
        }
    }

    #[test]
    fn summary_categories_are_sorted_by_name() {
        let mut tracker = PerformanceTracker::default();
        for cat in ["science", "art", "history"] {
            tracker.record_question_result(event(cat, true));
        }
        let summary = performance_summary(&tracker);
        let names: Vec<&str> = summary["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["category"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["art", "history", "science"]);
    }

    #[test]
    fn summary_reports_percentages_not_fractions() {
        let mut tracker = PerformanceTracker::default();
        tracker.record_question_result(event("history", true));
        tracker.record_question_result(event("history", false));
        let summary = performance_summary(&tracker);
        assert_eq!(summary["accuracy_pct"], 50.0);
        assert_eq!(summary["total_questions"], 2);
    }

    #[test]
    fn snapshot_survives_the_json_round_trip() {
        let mut tracker = PerformanceTracker::default();
        for i in 0..7 {
            tracker.record_question_result(event("history", i % 3 != 0));
        }
        let exported = tracker.export_performance();
        let restored = performance_from_json(&snapshot_json(&exported)).unwrap();
        assert_eq!(exported, restored);
    }

    #[test]
    fn malformed_snapshot_yields_none() {
        assert!(performance_from_json(&json!({"streak": "not a number"})).is_none());
        assert!(performance_from_json(&json!(null)).is_none());
    }
}
