//! Solving engine
//!
//! Frequency analysis, candidate filtering and guess selection. Everything
//! here is pure and synchronous over immutable inputs.

mod engine;
pub mod filter;
pub mod frequency;
pub mod scorer;
pub mod strategy;

pub use engine::{Narrowed, Solver};
pub use filter::{FeedbackConstraint, filter, filter_history};
pub use frequency::{FrequencyTables, LetterFrequencies, PositionalFrequencies};
pub use scorer::{
    DEFAULT_OPENERS, DEFAULT_SEARCH_LIMIT, ScoreBreakdown, ScorerConfig, recommend, score_word,
};
pub use strategy::{HeuristicStrategy, RandomStrategy, Strategy, StrategyType};
