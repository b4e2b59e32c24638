//! Performance tracking — the single source of truth for "how has this
//! player done so far."
//!
//! [`PerformanceTracker::record_question_result`] is the only mutator in the
//! whole engine; recommendation and selection are pure reads over the
//! tracker's current snapshot.

use log::debug;

use crate::adaptive_engine::models::{
    AdaptiveConfig, CategoryStat, DifficultyStat, DifficultyTier, OutcomeEvent,
    PlayerPerformance,
};

/// Owns one player's [`PlayerPerformance`] together with the immutable
/// [`AdaptiveConfig`] it is scored against.
///
/// One instance per player. The tracker holds no locks and performs no I/O;
/// a concurrent host must treat the whole aggregate as a single unit of
/// mutual exclusion.
#[derive(Debug, Clone)]
pub struct PerformanceTracker {
    config: AdaptiveConfig,
    performance: PlayerPerformance,
}

impl PerformanceTracker {
    pub fn new(config: AdaptiveConfig) -> Self {
        PerformanceTracker {
            config,
            performance: PlayerPerformance::new(),
        }
    }

    /// Restore a tracker from a previously exported snapshot.
    pub fn from_snapshot(config: AdaptiveConfig, snapshot: PlayerPerformance) -> Self {
        PerformanceTracker {
            config,
            performance: snapshot,
        }
    }

    /// Ingest one outcome event, applied as one logical update.
    ///
    /// No validation: categories are caller-defined free text and are
    /// accepted verbatim, and the operation cannot fail. Counters, streaks,
    /// the global running mean, the per-category and per-tier accumulators,
    /// and the bounded recent window all advance together.
    pub fn record_question_result(&mut self, event: OutcomeEvent) {
        let perf = &mut self.performance;

        perf.total_questions += 1;
        if event.correct {
            perf.correct_answers += 1;
            perf.streak_count += 1;
            perf.longest_streak = perf.longest_streak.max(perf.streak_count);
        } else {
            perf.streak_count = 0;
        }

        let n = perf.total_questions as f64;
        perf.average_time_per_question =
            ((perf.average_time_per_question * (n - 1.0)) + event.time_spent_ms as f64) / n;

        let stat = perf
            .category_performance
            .entry(event.category.clone())
            .or_insert_with(|| CategoryStat::new(event.category.clone()));
        stat.record(event.correct, event.time_spent_ms, &self.config);

        perf.difficulty_performance[event.difficulty.index()]
            .record(event.correct, event.time_spent_ms);

        debug!(
            "recorded {} answer in '{}' ({}): streak {}, category suggestion {}",
            if event.correct { "correct" } else { "wrong" },
            event.category,
            event.difficulty,
            perf.streak_count,
            stat.suggested_difficulty,
        );

        perf.recent_performance.push_back(event);
        while perf.recent_performance.len() > self.config.recent_performance_window {
            perf.recent_performance.pop_front();
        }
    }

    /// Fraction of recent-window answers that were correct; `0.0` when empty.
    pub fn recent_accuracy(&self) -> f64 {
        self.performance.recent_accuracy()
    }

    /// Lifetime accuracy; `0.0` before the first answer.
    pub fn overall_accuracy(&self) -> f64 {
        self.performance.overall_accuracy()
    }

    pub fn performance(&self) -> &PlayerPerformance {
        &self.performance
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub fn category_stat(&self, category: &str) -> Option<&CategoryStat> {
        self.performance.category_performance.get(category)
    }

    pub fn difficulty_stat(&self, tier: DifficultyTier) -> &DifficultyStat {
        self.performance.difficulty_stat(tier)
    }

    /// Deep, caller-owned copy of the current state — the persistence hook.
    pub fn export_performance(&self) -> PlayerPerformance {
        self.performance.clone()
    }

    /// Wholesale replace the current state with a caller-supplied snapshot.
    pub fn import_performance(&mut self, snapshot: PlayerPerformance) {
        self.performance = snapshot;
    }

    /// Start a fresh session with the same tuning.
    pub fn reset(&mut self) {
        self.performance = PlayerPerformance::new();
    }
}

impl Default for PerformanceTracker {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(correct: bool, ms: u64) -> OutcomeEvent {
        OutcomeEvent {
            question_id: "q".to_string(),
            category: "history".to_string(),
            difficulty: DifficultyTier::Easy,
            correct,
            time_spent_ms: ms,
            timestamp_ms: 0,
        }
    }

    #[test]
    fn global_running_mean_is_exact() {
        let mut tracker = PerformanceTracker::default();
        for ms in [1000, 2000, 6000] {
            tracker.record_question_result(event(true, ms));
        }
        assert_eq!(tracker.performance().average_time_per_question, 3000.0);
    }

    #[test]
    fn all_four_difficulty_stats_exist_from_birth() {
        let tracker = PerformanceTracker::default();
        for tier in DifficultyTier::ALL {
            let stat = tracker.difficulty_stat(tier);
            assert_eq!(stat.difficulty, tier);
            assert_eq!(stat.questions_answered, 0);
            assert_eq!(stat.accuracy, 0.0);
        }
        // Categories, by contrast, appear only once observed.
        assert!(tracker.performance().category_performance.is_empty());
    }

    #[test]
    fn recent_accuracy_is_zero_when_empty() {
        let tracker = PerformanceTracker::default();
        assert_eq!(tracker.recent_accuracy(), 0.0);
        assert_eq!(tracker.overall_accuracy(), 0.0);
    }

    #[test]
    fn window_evicts_oldest_first() {
        let mut tracker = PerformanceTracker::new(AdaptiveConfig {
            recent_performance_window: 3,
            ..AdaptiveConfig::default()
        });
        for i in 0..5u64 {
            let mut e = event(true, 100);
            e.question_id = format!("q{i}");
            tracker.record_question_result(e);
        }
        let ids: Vec<&str> = tracker
            .performance()
            .recent_performance
            .iter()
            .map(|e| e.question_id.as_str())
            .collect();
        assert_eq!(ids, ["q2", "q3", "q4"]);
    }
}
