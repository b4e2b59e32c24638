//! # trivia_adapt
//!
//! A fully offline adaptive-difficulty and question-selection engine for
//! trivia-style quiz games.
//!
//! The engine tracks a player's rolling performance across categories and
//! difficulty tiers, derives a recommended tier from weighted accuracy, and
//! builds question batches that balance appropriate challenge against
//! variety, with bonus questions unlocked on long streaks.
//!
//! ## How it works
//!
//! 1. After every answered (or timed-out) question, report an
//!    [`OutcomeEvent`] to a [`PerformanceTracker`] — the engine's only
//!    mutator.
//! 2. Ask [`recommended_difficulty`] for the tier the player should face
//!    next, globally or scoped to one category.
//! 3. Call [`select_adaptive_questions`] with your question pool to get a
//!    shuffled batch, ~70% at the recommended tier and ~30% elsewhere,
//!    backfilled when a slice runs short.
//!
//! Data flows one direction — events → tracker → recommender → selector —
//! and everything past the tracker is a pure read, so the whole cycle is a
//! strictly sequential read-modify-read per question.
//!
//! ## Key properties
//!
//! - **Offline and caller-owned**: no I/O, no ambient state, one engine
//!   instance per player. Persistence is the host's job via
//!   [`PerformanceTracker::export_performance`] /
//!   [`PerformanceTracker::import_performance`].
//! - **Deterministic**: every selecting function takes a caller-supplied
//!   `Rng`, so a seeded `StdRng` reproduces the exact same batch.
//! - **Permissive by design**: categories are free text, malformed events
//!   are accepted verbatim, and undersized pools degrade to shorter (or
//!   empty) results instead of errors.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use trivia_adapt::{
//!     recommended_difficulty, select_adaptive_questions, AdaptiveConfig, DifficultyTier,
//!     OutcomeEvent, PerformanceTracker, TriviaQuestion,
//! };
//!
//! let mut tracker = PerformanceTracker::new(AdaptiveConfig::default());
//!
//! // The UI reports one event per answered question:
//! tracker.record_question_result(OutcomeEvent {
//!     question_id: "q-001".into(),
//!     category: "history".into(),
//!     difficulty: DifficultyTier::Easy,
//!     correct: true,
//!     time_spent_ms: 4200,
//!     timestamp_ms: 0,
//! });
//!
//! // Fresh players stay on Easy until the minimum sample is reached:
//! assert_eq!(recommended_difficulty(&tracker, None), DifficultyTier::Easy);
//!
//! // Build the next batch from the content pool:
//! let pool: Vec<TriviaQuestion> = vec![];
//! let mut rng = StdRng::seed_from_u64(42);
//! let batch = select_adaptive_questions(&mut rng, &pool, &tracker, 10, Some("history"));
//! assert!(batch.is_empty()); // empty pool -> empty batch, never an error
//! ```

pub mod adaptive_engine;
pub mod client_adapter;

// Convenience re-exports so callers can use `trivia_adapt::PerformanceTracker`
// directly without reaching into `adaptive_engine::`.
pub use adaptive_engine::{
    bonus_question, bonus_question_difficulty, calculate_category_difficulty, difficulty_mix,
    is_category_mastered, recommended_difficulty, select_adaptive_questions,
    should_offer_bonus_question, strongest_categories, weakest_categories, AccuracyThresholds,
    AdaptiveConfig, AnswerOption, CategoryStat, DifficultyStat, DifficultyTier, OutcomeEvent,
    PerformanceTracker, PlayerPerformance, QuestionInfo, TriviaQuestion,
};
