//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, feedback, guess
//! records and the dictionary. All types here are pure and testable.

mod dictionary;
mod error;
mod feedback;
mod record;
mod word;

pub use dictionary::Dictionary;
pub use error::EngineError;
pub use feedback::{Feedback, FeedbackSymbol, evaluate_bytes};
pub use record::GuessRecord;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_from_index, letter_index};

/// Maximum number of guesses in a single game
pub const MAX_ATTEMPTS: usize = 6;
