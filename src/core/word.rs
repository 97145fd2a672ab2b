//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word along with its bytes for
//! fast per-position and per-letter access.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of symbols in the closed alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter Wordle word
///
/// Immutable once created; equality is exact letter-sequence equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only letters a-z")]
    InvalidCharacters,
}

/// Index of a lowercase ASCII letter in the alphabet (`b'a'` → 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Lowercase ASCII letter for an alphabet index (0 → `b'a'`)
#[inline]
#[must_use]
pub const fn letter_from_index(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"CRANE"` is accepted.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than letters a-z
    ///
    /// # Examples
    /// ```
    /// use wordle_optimizer::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();

        // Lowercasing can change the length of non-ASCII input
        let length = raw.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        let text = raw.to_lowercase();

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidCharacters)?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Count of each letter in the word, indexed by alphabet position
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts().iter().filter(|&&count| count > 0).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
