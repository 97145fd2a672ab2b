//! Engine error taxonomy

use thiserror::Error;

/// Errors raised by the solving engine itself
///
/// These indicate malformed input from a programming error or a violated
/// precondition, never a user typo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Feedback or raw letter sequences of the wrong shape
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A recommendation was requested from an empty candidate set
    #[error("no remaining possibilities")]
    EmptyCandidateSet,
}
