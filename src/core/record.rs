//! Guess history entries

use super::{Feedback, Word};

/// One submitted guess and the feedback it received
///
/// Created when a guess is accepted and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
    turn: usize,
}

impl GuessRecord {
    /// Create a record for the given 1-based turn
    #[must_use]
    pub fn new(word: Word, feedback: Feedback, turn: usize) -> Self {
        debug_assert!(turn >= 1, "turns are 1-based");
        Self {
            word,
            feedback,
            turn,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// 1-based turn in which the guess was made
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }
}
