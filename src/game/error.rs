//! Game session and target selection errors

use crate::core::WordError;
use thiserror::Error;

/// Reasons a session operation was rejected
///
/// Every variant leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Please enter a 5-letter guess (got {0} letters)")]
    InvalidLength(usize),
    #[error("Please enter only letters")]
    InvalidCharacters,
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
    #[error("The game is over; start a new game to keep playing")]
    GameOver,
    #[error("Please set a target word first")]
    TargetNotSet,
    #[error("The target can only be set before the first guess")]
    TargetLocked,
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Failures of the daily word collaborator
///
/// Never fatal: the caller falls back to a random target.
#[derive(Debug, Error)]
pub enum DailyWordError {
    #[error("daily word unavailable: {0}")]
    Unavailable(String),
    #[error("could not read daily word: {0}")]
    Io(#[from] std::io::Error),
    #[error("daily word '{0}' is not a five-letter word")]
    Malformed(String),
}
