//! Wordle feedback calculation and representation
//!
//! Feedback is one symbol per guess position:
//! - `Hit` = correct letter in the correct position (green)
//! - `Present` = letter occurs elsewhere in the target (yellow)
//! - `Absent` = letter does not occur, after duplicates already matched (gray)

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use super::EngineError;
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Hit,
    Present,
    Absent,
}

impl FeedbackSymbol {
    /// Single-letter code: `G`, `Y` or `B`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Colored square emoji
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// True for `Hit` and `Present`, the symbols that credit a letter
    #[inline]
    #[must_use]
    pub const fn is_credited(self) -> bool {
        matches!(self, Self::Hit | Self::Present)
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All hits (the guess was the target)
    pub const ALL_HIT: Self = Self([FeedbackSymbol::Hit; WORD_LENGTH]);

    /// Create feedback from explicit symbols
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Calculate the feedback when `guess` is played against the hidden `target`
    ///
    /// Implements the exact duplicate-letter rules: a letter occurring k times
    /// in the target is credited (hit or present) at most k times in the guess.
    ///
    /// # Algorithm
    /// 1. First pass: mark hits and consume those target letters
    /// 2. Second pass: mark present from the remaining unconsumed target letters
    ///
    /// # Examples
    /// ```
    /// use wordle_optimizer::core::{Feedback, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &target).to_string(), "YBBBG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        Self::evaluate_letters(guess.chars(), target.chars())
    }

    // Allow: index needed to access guess[i], target[i] and result[i] together
    #[allow(clippy::needless_range_loop)]
    fn evaluate_letters(guess: &[u8; WORD_LENGTH], target: &[u8; WORD_LENGTH]) -> Self {
        let mut result = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut unconsumed = [0u8; ALPHABET_SIZE];

        // First pass: hits; everything else stays in the target's pool
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                result[i] = FeedbackSymbol::Hit;
            } else {
                unconsumed[letter_index(target[i])] += 1;
            }
        }

        // Second pass: present letters, consumed one occurrence at a time
        for i in 0..WORD_LENGTH {
            if result[i] == FeedbackSymbol::Hit {
                continue;
            }
            let pool = &mut unconsumed[letter_index(guess[i])];
            if *pool > 0 {
                result[i] = FeedbackSymbol::Present;
                *pool -= 1;
            }
        }

        Self(result)
    }

    /// All symbols in position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_HIT
    }

    /// Count the number of hits
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&s| s == FeedbackSymbol::Hit).count()
    }

    /// Count the number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == FeedbackSymbol::Present).count()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Evaluate raw letter sequences
///
/// Entry point for callers that hold unvalidated bytes rather than `Word`s.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if either side is not exactly five
/// lowercase letters.
pub fn evaluate_bytes(guess: &[u8], target: &[u8]) -> Result<Feedback, EngineError> {
    let as_letters = |side: &str, bytes: &[u8]| -> Result<[u8; WORD_LENGTH], EngineError> {
        let letters: [u8; WORD_LENGTH] = bytes.try_into().map_err(|_| {
            EngineError::InvalidInput(format!(
                "{side} must have {WORD_LENGTH} letters, got {}",
                bytes.len()
            ))
        })?;
        if letters.iter().all(u8::is_ascii_lowercase) {
            Ok(letters)
        } else {
            Err(EngineError::InvalidInput(format!(
                "{side} must contain only letters a-z"
            )))
        }
    };

    let guess = as_letters("guess", guess)?;
    let target = as_letters("target", target)?;
    Ok(Feedback::evaluate_letters(&guess, &target))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.code())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GYBBG", "GY--G" or "🟩🟨⬜⬜🟩"
impl std::str::FromStr for Feedback {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(EngineError::InvalidInput(format!(
                "feedback must have {WORD_LENGTH} symbols, got {}",
                chars.len()
            )));
        }

        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = FeedbackSymbol::from_char(ch).ok_or_else(|| {
                EngineError::InvalidInput(format!("unknown feedback symbol '{ch}'"))
            })?;
        }

        Ok(Self(symbols))
    }
}
