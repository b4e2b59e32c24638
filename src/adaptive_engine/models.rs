use std::collections::{HashMap, VecDeque};
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

/// The four difficulty tiers, ordered `Easy < Medium < Hard < Expert`.
///
/// The ordering is load-bearing: threshold comparisons and "increase" /
/// "decrease" language in [`AccuracyThresholds`] refer to moving along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyTier {
    /// All four tiers in ascending order.
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Expert,
    ];

    /// Position in the ladder (0..=3), usable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy   => write!(f, "Easy"),
            DifficultyTier::Medium => write!(f, "Medium"),
            DifficultyTier::Hard   => write!(f, "Hard"),
            DifficultyTier::Expert => write!(f, "Expert"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question pool types
// ---------------------------------------------------------------------------

/// Read-only view the selector needs from a pool item.
///
/// The engine only ever reads `category` and `difficulty`; every other field
/// of the host's question type passes through selection untouched. Implement
/// this for your own question struct, or use [`TriviaQuestion`] directly.
pub trait QuestionInfo {
    fn category(&self) -> &str;
    fn difficulty(&self) -> DifficultyTier;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// A ready-to-render trivia question as the content tables ship it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub id: String,
    pub category: String,
    pub difficulty: DifficultyTier,
    pub prompt: String,
    pub answers: Vec<AnswerOption>,
}

impl QuestionInfo for TriviaQuestion {
    fn category(&self) -> &str {
        &self.category
    }

    fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }
}

// ---------------------------------------------------------------------------
// Outcome events
// ---------------------------------------------------------------------------

/// One answered (or timed-out) question, reported by the UI exactly once.
///
/// Timed-out and skipped questions should still be reported, typically with
/// `correct: false`, so streak and accuracy tracking stay honest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEvent {
    pub question_id: String,
    /// Free text — categories are open-ended content data, not a closed enum.
    pub category: String,
    pub difficulty: DifficultyTier,
    pub correct: bool,
    pub time_spent_ms: u64,
    pub timestamp_ms: u64,
}

// ---------------------------------------------------------------------------
// Performance accumulators
// ---------------------------------------------------------------------------

/// Per-category accumulator. Created lazily on first sighting of a category.
///
/// `accuracy` and `suggested_difficulty` are derived on every update and are
/// never set independently. Invariant: `correct_answers <= questions_answered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub average_time_ms: f64,
    pub accuracy: f64,
    pub suggested_difficulty: DifficultyTier,
}

impl CategoryStat {
    pub(crate) fn new(category: String) -> Self {
        CategoryStat {
            category,
            questions_answered: 0,
            correct_answers: 0,
            average_time_ms: 0.0,
            accuracy: 0.0,
            suggested_difficulty: DifficultyTier::Easy,
        }
    }

    pub(crate) fn record(&mut self, correct: bool, time_spent_ms: u64, config: &AdaptiveConfig) {
        self.questions_answered += 1;
        if correct {
            self.correct_answers += 1;
        }
        let n = self.questions_answered as f64;
        self.average_time_ms = ((self.average_time_ms * (n - 1.0)) + time_spent_ms as f64) / n;
        self.accuracy = self.correct_answers as f64 / n;
        self.suggested_difficulty = config.suggested_tier(self.questions_answered, self.accuracy);
    }
}

/// Per-tier accumulator. All four instances exist from engine construction
/// with zero counts — the tier enum is closed, unlike categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyStat {
    pub difficulty: DifficultyTier,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub average_time_ms: f64,
    pub accuracy: f64,
}

impl DifficultyStat {
    pub(crate) fn new(difficulty: DifficultyTier) -> Self {
        DifficultyStat {
            difficulty,
            questions_answered: 0,
            correct_answers: 0,
            average_time_ms: 0.0,
            accuracy: 0.0,
        }
    }

    pub(crate) fn record(&mut self, correct: bool, time_spent_ms: u64) {
        self.questions_answered += 1;
        if correct {
            self.correct_answers += 1;
        }
        let n = self.questions_answered as f64;
        self.average_time_ms = ((self.average_time_ms * (n - 1.0)) + time_spent_ms as f64) / n;
        self.accuracy = self.correct_answers as f64 / n;
    }
}

/// Everything the engine knows about one player's session history.
///
/// Mutated exclusively through
/// [`PerformanceTracker::record_question_result`](crate::PerformanceTracker::record_question_result);
/// every other operation is a pure read over the current snapshot. Serializes
/// round-trip clean through `serde_json` — this is the caller's persistence
/// hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub average_time_per_question: f64,
    /// Keys appear lazily, on the first event naming the category.
    pub category_performance: HashMap<String, CategoryStat>,
    /// Indexed by [`DifficultyTier::index`]; all four present from birth.
    pub difficulty_performance: [DifficultyStat; 4],
    /// Current consecutive-correct run.
    pub streak_count: u32,
    /// High-water mark; monotonically non-decreasing.
    pub longest_streak: u32,
    /// Bounded FIFO of the most recent events, oldest evicted first.
    pub recent_performance: VecDeque<OutcomeEvent>,
}

impl PlayerPerformance {
    pub fn new() -> Self {
        PlayerPerformance {
            total_questions: 0,
            correct_answers: 0,
            average_time_per_question: 0.0,
            category_performance: HashMap::new(),
            difficulty_performance: DifficultyTier::ALL.map(DifficultyStat::new),
            streak_count: 0,
            longest_streak: 0,
            recent_performance: VecDeque::new(),
        }
    }

    /// Lifetime accuracy; `0.0` with no samples (never NaN).
    pub fn overall_accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.total_questions as f64
    }

    /// Fraction correct inside the recent window; `0.0` when empty.
    pub fn recent_accuracy(&self) -> f64 {
        if self.recent_performance.is_empty() {
            return 0.0;
        }
        let correct = self.recent_performance.iter().filter(|e| e.correct).count();
        correct as f64 / self.recent_performance.len() as f64
    }

    pub fn difficulty_stat(&self, tier: DifficultyTier) -> &DifficultyStat {
        &self.difficulty_performance[tier.index()]
    }
}

impl Default for PlayerPerformance {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Accuracy cut-offs for the tier ladder, all in `[0, 1]`.
///
/// The `increase_*` thresholds gate both the per-category suggestion and the
/// global weighted recommendation. The `decrease_*` thresholds are part of
/// the tuning surface for hosts that step difficulty down gradually; the
/// reference ladder itself only compares upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyThresholds {
    pub increase_to_medium: f64,
    pub increase_to_hard: f64,
    pub increase_to_expert: f64,
    pub decrease_to_easy: f64,
    pub decrease_to_medium: f64,
    pub decrease_to_hard: f64,
}

impl AccuracyThresholds {
    /// Top-down ladder: the highest tier whose threshold `accuracy` meets.
    pub fn tier_for(&self, accuracy: f64) -> DifficultyTier {
        if accuracy >= self.increase_to_expert {
            DifficultyTier::Expert
        } else if accuracy >= self.increase_to_hard {
            DifficultyTier::Hard
        } else if accuracy >= self.increase_to_medium {
            DifficultyTier::Medium
        } else {
            DifficultyTier::Easy
        }
    }
}

impl Default for AccuracyThresholds {
    fn default() -> Self {
        AccuracyThresholds {
            increase_to_medium: 0.70,
            increase_to_hard:   0.80,
            increase_to_expert: 0.90,
            decrease_to_easy:   0.30,
            decrease_to_medium: 0.40,
            decrease_to_hard:   0.50,
        }
    }
}

/// Engine tuning, supplied once at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Below this sample size every suggestion is `Easy` (cold-start policy).
    pub min_questions_for_adaptation: u32,
    pub accuracy_thresholds: AccuracyThresholds,
    /// Consecutive correct answers that unlock a bonus question.
    pub streak_bonus_threshold: u32,
    /// Capacity of the recent-performance window.
    pub recent_performance_window: usize,
    /// Accuracy at or above which a sufficiently-sampled category counts as mastered.
    pub category_mastery_threshold: f64,
}

impl AdaptiveConfig {
    /// The tier suggested for a sample of `questions_answered` at `accuracy`.
    ///
    /// Pure calculation shared by the tracker's per-category bookkeeping and
    /// the recommender, so both always agree.
    pub fn suggested_tier(&self, questions_answered: u32, accuracy: f64) -> DifficultyTier {
        if questions_answered < self.min_questions_for_adaptation {
            DifficultyTier::Easy
        } else {
            self.accuracy_thresholds.tier_for(accuracy)
        }
    }
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        AdaptiveConfig {
            min_questions_for_adaptation: 5,
            accuracy_thresholds: AccuracyThresholds::default(),
            streak_bonus_threshold: 5,
            recent_performance_window: 10,
            category_mastery_threshold: 0.85,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ladder_matches_default_thresholds() {
        let t = AccuracyThresholds::default();
        assert_eq!(t.tier_for(0.0),  DifficultyTier::Easy);
        assert_eq!(t.tier_for(0.69), DifficultyTier::Easy);
        assert_eq!(t.tier_for(0.70), DifficultyTier::Medium);
        assert_eq!(t.tier_for(0.80), DifficultyTier::Hard);
        assert_eq!(t.tier_for(0.90), DifficultyTier::Expert);
        assert_eq!(t.tier_for(1.0),  DifficultyTier::Expert);
    }

    #[test]
    fn tier_order_is_ascending() {
        let [easy, medium, hard, expert] = DifficultyTier::ALL;
        assert!(easy < medium && medium < hard && hard < expert);
        for (i, tier) in DifficultyTier::ALL.into_iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn category_stat_running_mean_is_exact() {
        let config = AdaptiveConfig::default();
        let mut stat = CategoryStat::new("history".to_string());
        for ms in [1000, 2000, 3000] {
            stat.record(true, ms, &config);
        }
        assert_eq!(stat.average_time_ms, 2000.0);
        assert_eq!(stat.accuracy, 1.0);
    }

    #[test]
    fn cold_start_suggestion_is_easy_even_at_full_accuracy() {
        let config = AdaptiveConfig::default();
        assert_eq!(config.suggested_tier(4, 1.0), DifficultyTier::Easy);
        assert_eq!(config.suggested_tier(5, 1.0), DifficultyTier::Expert);
    }
}
