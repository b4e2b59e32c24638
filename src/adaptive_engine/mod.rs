//! Core adaptive engine — performance tracking, difficulty recommendation,
//! and batch selection.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: tiers, events, stats, config, the question seam |
//! | `tracker`     | `PerformanceTracker` — the engine's only mutator |
//! | `recommender` | Pure derivations: tier ladder, weighted recommendation, mastery, rankings |
//! | `selector`    | 70/30 batch building with backfill, plus bonus-question draw |
//!
//! Data flows one direction: outcome events → tracker → recommender →
//! selector → next batch. No module calls back into an earlier one.

pub mod models;
pub mod recommender;
pub mod selector;
pub mod tracker;

// Re-export the public API surface so callers can use
// `adaptive_engine::recommended_difficulty` without reaching into sub-modules.
pub use models::{
    AccuracyThresholds, AdaptiveConfig, AnswerOption, CategoryStat, DifficultyStat,
    DifficultyTier, OutcomeEvent, PlayerPerformance, QuestionInfo, TriviaQuestion,
};
pub use recommender::{
    bonus_question_difficulty, calculate_category_difficulty, is_category_mastered,
    recommended_difficulty, should_offer_bonus_question, strongest_categories,
    weakest_categories,
};
pub use selector::{bonus_question, difficulty_mix, select_adaptive_questions};
pub use tracker::PerformanceTracker;
