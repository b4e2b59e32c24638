//! Full demo of the adaptive difficulty pipeline.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `trivia_adapt` works end to end:
//!
//! 1. **Session simulation** — a scripted player answers 20 questions
//!    (strong in "characters", shaky in "science") and every outcome is
//!    reported to the tracker.
//! 2. **Recommendations** — global and per-category tiers after the session,
//!    plus the weakest/strongest category rankings.
//! 3. **Batch selection** — a 10-question adaptive batch with its
//!    difficulty mix, and a streak-gated bonus question.
//! 4. **Persistence** — export → JSON → import, the way a host saves and
//!    restores a session.
//!
//! Set `RUST_LOG=debug` to watch the recommender's branch decisions.

use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_adapt::{
    bonus_question, client_adapter, recommended_difficulty, select_adaptive_questions,
    strongest_categories, weakest_categories, AdaptiveConfig, AnswerOption, DifficultyTier,
    OutcomeEvent, PerformanceTracker, TriviaQuestion,
};

/// A tiny content pool: `count` questions per category/tier pair.
fn build_pool() -> Vec<TriviaQuestion> {
    let mut pool = Vec::new();
    let entries = [
        ("characters", DifficultyTier::Easy, 6),
        ("characters", DifficultyTier::Medium, 6),
        ("characters", DifficultyTier::Hard, 6),
        ("characters", DifficultyTier::Expert, 4),
        ("science", DifficultyTier::Easy, 6),
        ("science", DifficultyTier::Medium, 4),
    ];
    for (category, difficulty, count) in entries {
        for i in 0..count {
            pool.push(TriviaQuestion {
                id: format!("{category}-{difficulty}-{i}"),
                category: category.to_string(),
                difficulty,
                prompt: format!("{category} question #{i} ({difficulty})"),
                answers: vec![
                    AnswerOption { id: "a".into(), text: "Option A".into(), is_correct: true },
                    AnswerOption { id: "b".into(), text: "Option B".into(), is_correct: false },
                ],
            });
        }
    }
    pool
}

fn main() {
    env_logger::init();

    let mut tracker = PerformanceTracker::new(AdaptiveConfig::default());
    let pool = build_pool();

    // ── Session simulation ───────────────────────────────────────────────────
    // (category, correct, ms): a player who knows their characters but
    // keeps missing science questions.
    let script = [
        ("characters", true, 3000), ("characters", true, 2500),
        ("science", false, 9000),   ("characters", true, 2800),
        ("characters", true, 2200), ("characters", true, 2000),
        ("science", false, 8500),   ("science", true, 6000),
        ("characters", true, 1900), ("characters", true, 1800),
        ("science", false, 9500),   ("characters", true, 2100),
        ("science", true, 5500),    ("characters", true, 1700),
        ("science", false, 8000),   ("characters", true, 1600),
        ("characters", true, 1500), ("characters", true, 1400),
        ("science", true, 5000),    ("characters", true, 1300),
    ];

    println!();
    println!("══ Session: 20 scripted answers ══");
    for (i, (category, correct, ms)) in script.into_iter().enumerate() {
        tracker.record_question_result(OutcomeEvent {
            question_id: format!("q{i}"),
            category: category.to_string(),
            difficulty: DifficultyTier::Easy,
            correct,
            time_spent_ms: ms,
            timestamp_ms: i as u64 * 10_000,
        });
    }
    let perf = tracker.performance();
    println!(
        "  {} answered, {} correct, streak {}, longest {}",
        perf.total_questions, perf.correct_answers, perf.streak_count, perf.longest_streak
    );

    // ── Recommendations ──────────────────────────────────────────────────────
    println!();
    println!("══ Recommendations ══");
    println!("  Global:             {}", recommended_difficulty(&tracker, None));
    println!("  For 'characters':   {}", recommended_difficulty(&tracker, Some("characters")));
    println!("  For 'science':      {}", recommended_difficulty(&tracker, Some("science")));
    for stat in weakest_categories(&tracker, 3) {
        println!("  Weakest:   {} ({:.0}% over {})",
            stat.category, stat.accuracy * 100.0, stat.questions_answered);
    }
    for stat in strongest_categories(&tracker, 3) {
        println!("  Strongest: {} ({:.0}% over {})",
            stat.category, stat.accuracy * 100.0, stat.questions_answered);
    }

    // ── Batch selection ──────────────────────────────────────────────────────
    println!();
    println!("══ Adaptive batch: 10 questions for 'characters' ══");
    let mut rng = StdRng::seed_from_u64(42);
    let batch = select_adaptive_questions(&mut rng, &pool, &tracker, 10, Some("characters"));
    for q in &batch {
        println!("  [{}] {}", q.difficulty, q.prompt);
    }

    match bonus_question(&mut rng, &pool, &tracker) {
        Some(q) => println!("  Bonus unlocked: {}", q.prompt),
        None    => println!("  No bonus this round."),
    }

    // ── Persistence ──────────────────────────────────────────────────────────
    println!();
    println!("══ Persistence round-trip ══");
    let snapshot = client_adapter::snapshot_json(&tracker.export_performance());
    let restored = client_adapter::performance_from_json(&snapshot)
        .expect("snapshot we just wrote must parse");
    let mut restored_tracker = PerformanceTracker::new(AdaptiveConfig::default());
    restored_tracker.import_performance(restored);
    println!(
        "  Restored {} answers; global recommendation still {}",
        restored_tracker.performance().total_questions,
        recommended_difficulty(&restored_tracker, None)
    );

    println!();
    println!("══ UI summary payload ══");
    println!("{}", serde_json::to_string_pretty(&client_adapter::performance_summary(&tracker))
        .unwrap_or_default());
}
