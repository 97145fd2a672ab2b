//! Game sessions
//!
//! A session plays one game against a hidden target and keeps the solver's
//! candidate set and recommendation in step with every accepted guess.

mod error;
mod session;
mod target;

pub use error::{DailyWordError, GameError};
pub use session::{GameSession, GameStatus, Recommendation, TurnOutcome};
pub use target::{
    DAILY_WORD_ENV, DailyWordSource, EnvDailyWord, FileDailyWord, FixedDailyWord, GameMode,
    NoDailyWord, SystemTargets, TargetOrigin, TargetSelection, TargetSource, select_target,
};
