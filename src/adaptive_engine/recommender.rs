//! Difficulty recommendation — pure derivations over the tracker's snapshot.
//!
//! Nothing here holds state: every function reads the tracker's current
//! [`PlayerPerformance`](crate::PlayerPerformance) plus the immutable config
//! and returns a value. The tier ladder itself lives on
//! [`AccuracyThresholds::tier_for`](crate::AccuracyThresholds::tier_for) so
//! the tracker's embedded per-category suggestion and this module always
//! agree.

use log::debug;

use crate::adaptive_engine::models::{AdaptiveConfig, CategoryStat, DifficultyTier};
use crate::adaptive_engine::tracker::PerformanceTracker;

/// Weight of lifetime accuracy in the global recommendation.
const OVERALL_WEIGHT: f64 = 0.3;
/// Weight of recent-window accuracy. Recent form dominates so the
/// recommendation follows a hot or cold streak instead of being dragged by
/// early-game results.
const RECENT_WEIGHT: f64 = 0.7;

/// Tier suggested for one category's accumulated stats.
///
/// Below the minimum sample size this is `Easy` unconditionally; afterwards
/// the accuracy climbs the increase ladder. Decrease thresholds never gate
/// this function — category mastery is sticky once earned.
pub fn calculate_category_difficulty(stat: &CategoryStat, config: &AdaptiveConfig) -> DifficultyTier {
    config.suggested_tier(stat.questions_answered, stat.accuracy)
}

/// The difficulty the player should face next, optionally scoped to one
/// category.
///
/// Cold start (fewer total answers than the minimum) always yields `Easy`.
/// A sufficiently-sampled category overrides the global signal; otherwise a
/// weighted blend of lifetime and recent accuracy climbs the same ladder.
pub fn recommended_difficulty(
    tracker: &PerformanceTracker,
    category: Option<&str>,
) -> DifficultyTier {
    let perf = tracker.performance();
    let config = tracker.config();

    if perf.total_questions < config.min_questions_for_adaptation {
        debug!(
            "cold start ({}/{} answers) -> Easy",
            perf.total_questions, config.min_questions_for_adaptation
        );
        return DifficultyTier::Easy;
    }

    if let Some(name) = category {
        if let Some(stat) = tracker.category_stat(name) {
            if stat.questions_answered >= config.min_questions_for_adaptation {
                debug!(
                    "category '{}' override: {:.2} accuracy over {} -> {}",
                    name, stat.accuracy, stat.questions_answered, stat.suggested_difficulty
                );
                return stat.suggested_difficulty;
            }
        }
    }

    let weighted =
        OVERALL_WEIGHT * perf.overall_accuracy() + RECENT_WEIGHT * perf.recent_accuracy();
    let tier = config.accuracy_thresholds.tier_for(weighted);
    debug!(
        "weighted accuracy {:.2} (overall {:.2}, recent {:.2}) -> {}",
        weighted,
        perf.overall_accuracy(),
        perf.recent_accuracy(),
        tier
    );
    tier
}

/// True once the current streak reaches the configured bonus threshold.
pub fn should_offer_bonus_question(tracker: &PerformanceTracker) -> bool {
    tracker.performance().streak_count >= tracker.config().streak_bonus_threshold
}

/// Bonus questions are a fixed high-stakes reward tier, not adaptively chosen.
pub fn bonus_question_difficulty() -> DifficultyTier {
    DifficultyTier::Expert
}

/// True iff the category has enough samples and its accuracy meets the
/// mastery threshold.
pub fn is_category_mastered(tracker: &PerformanceTracker, category: &str) -> bool {
    let config = tracker.config();
    match tracker.category_stat(category) {
        Some(stat) => {
            stat.questions_answered >= config.min_questions_for_adaptation
                && stat.accuracy >= config.category_mastery_threshold
        }
        None => false,
    }
}

/// Sufficiently-sampled categories, weakest first, truncated to `limit`.
///
/// Categories below the minimum sample size are excluded entirely, not
/// scored as zero. Ties break on category name so the ranking is stable.
pub fn weakest_categories<'a>(
    tracker: &'a PerformanceTracker,
    limit: usize,
) -> Vec<&'a CategoryStat> {
    let mut ranked = eligible_categories(tracker);
    ranked.sort_by(|a, b| {
        a.accuracy
            .total_cmp(&b.accuracy)
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked.truncate(limit);
    ranked
}

/// Sufficiently-sampled categories, strongest first, truncated to `limit`.
pub fn strongest_categories<'a>(
    tracker: &'a PerformanceTracker,
    limit: usize,
) -> Vec<&'a CategoryStat> {
    let mut ranked = eligible_categories(tracker);
    ranked.sort_by(|a, b| {
        b.accuracy
            .total_cmp(&a.accuracy)
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked.truncate(limit);
    ranked
}

/// Categories meeting the minimum sample size, unordered.
fn eligible_categories(tracker: &PerformanceTracker) -> Vec<&CategoryStat> {
    let min = tracker.config().min_questions_for_adaptation;
    tracker
        .performance()
        .category_performance
        .values()
        .filter(|s| s.questions_answered >= min)
        .collect()
}
