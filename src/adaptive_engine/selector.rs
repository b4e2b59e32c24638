//! Question selection — builds a shuffled batch biased toward the
//! recommended difficulty but never homogeneous.
//!
//! Selection is generic over the host's question type via
//! [`QuestionInfo`](crate::QuestionInfo) and over the RNG, so callers keep
//! their own rendering fields and tests stay deterministic with a seeded
//! `StdRng`.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adaptive_engine::models::QuestionInfo;
use crate::adaptive_engine::recommender;
use crate::adaptive_engine::tracker::PerformanceTracker;

/// Share of a batch drawn from the recommended tier; the rest comes from
/// other tiers for calibration and variety.
const PRIMARY_SHARE: f64 = 0.7;

/// Build a batch of `count` questions from `pool`, ~70% at the recommended
/// difficulty (scoped to `category` when given) and ~30% elsewhere.
///
/// The preferred slices are backfilled from whatever else the narrowed pool
/// holds when they run short, and the result may be shorter than `count` —
/// the selector never fabricates questions. `count == 0` or an empty
/// (narrowed) pool yields an empty batch.
pub fn select_adaptive_questions<Q, R>(
    rng: &mut R,
    pool: &[Q],
    tracker: &PerformanceTracker,
    count: usize,
    category: Option<&str>,
) -> Vec<Q>
where
    Q: QuestionInfo + Clone,
    R: Rng,
{
    if count == 0 {
        return Vec::new();
    }

    let recommended = recommender::recommended_difficulty(tracker, category);

    // Narrow to the requested category first; this is the universe for the
    // rest of the algorithm.
    let universe: Vec<&Q> = match category {
        Some(name) => pool.iter().filter(|q| q.category() == name).collect(),
        None       => pool.iter().collect(),
    };
    if universe.is_empty() {
        return Vec::new();
    }

    let (mut primary, mut secondary): (Vec<&Q>, Vec<&Q>) = universe
        .into_iter()
        .partition(|q| q.difficulty() == recommended);

    let primary_count = ((count as f64) * PRIMARY_SHARE).ceil() as usize;
    let secondary_count = count - primary_count;

    primary.shuffle(rng);
    secondary.shuffle(rng);

    let mut picked: Vec<&Q> = Vec::with_capacity(count);
    picked.extend(primary.iter().copied().take(primary_count));
    picked.extend(secondary.iter().copied().take(secondary_count));

    if picked.len() < count {
        // Either slice was under-supplied: backfill from whatever remains.
        let mut rest: Vec<&Q> = primary
            .iter()
            .copied()
            .skip(primary_count)
            .chain(secondary.iter().copied().skip(secondary_count))
            .collect();
        rest.shuffle(rng);
        picked.extend(rest.into_iter().take(count - picked.len()));
    }

    // Final shuffle so the primary/secondary split is not visible in the
    // presentation order.
    picked.shuffle(rng);

    debug!(
        "selected {}/{} questions at recommended tier {} (category {:?})",
        picked.len(),
        count,
        recommended,
        category
    );

    picked.into_iter().cloned().collect()
}

/// One uniformly random Expert-tier question, or `None` when the streak gate
/// has not been passed or the pool holds no Expert questions.
pub fn bonus_question<Q, R>(rng: &mut R, pool: &[Q], tracker: &PerformanceTracker) -> Option<Q>
where
    Q: QuestionInfo + Clone,
    R: Rng,
{
    if !recommender::should_offer_bonus_question(tracker) {
        return None;
    }
    let experts: Vec<&Q> = pool
        .iter()
        .filter(|q| q.difficulty() == recommender::bonus_question_difficulty())
        .collect();
    experts.choose(rng).map(|q| (*q).clone())
}

/// Per-tier counts of a batch, indexed by
/// [`DifficultyTier::index`](crate::DifficultyTier::index).
pub fn difficulty_mix<Q: QuestionInfo>(batch: &[Q]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for q in batch {
        counts[q.difficulty().index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::adaptive_engine::models::{DifficultyTier, TriviaQuestion};

    fn question(id: &str, category: &str, difficulty: DifficultyTier) -> TriviaQuestion {
        TriviaQuestion {
            id: id.to_string(),
            category: category.to_string(),
            difficulty,
            prompt: String::new(),
            answers: Vec::new(),
        }
    }

    #[test]
    fn zero_count_and_empty_pool_yield_empty_batches() {
        let mut rng = StdRng::seed_from_u64(1);
        let tracker = PerformanceTracker::default();
        let pool = vec![question("q1", "history", DifficultyTier::Easy)];

        let batch = select_adaptive_questions(&mut rng, &pool, &tracker, 0, None);
        assert!(batch.is_empty());

        let empty: Vec<TriviaQuestion> = Vec::new();
        let batch = select_adaptive_questions(&mut rng, &empty, &tracker, 5, None);
        assert!(batch.is_empty());
    }

    #[test]
    fn category_scope_with_no_matches_yields_empty_batch() {
        let mut rng = StdRng::seed_from_u64(2);
        let tracker = PerformanceTracker::default();
        let pool = vec![question("q1", "history", DifficultyTier::Easy)];
        let batch = select_adaptive_questions(&mut rng, &pool, &tracker, 5, Some("flags"));
        assert!(batch.is_empty());
    }

    #[test]
    fn difficulty_mix_counts_by_tier() {
        let batch = vec![
            question("a", "x", DifficultyTier::Easy),
            question("b", "x", DifficultyTier::Easy),
            question("c", "x", DifficultyTier::Expert),
        ];
        assert_eq!(difficulty_mix(&batch), [2, 0, 0, 1]);
    }
}
