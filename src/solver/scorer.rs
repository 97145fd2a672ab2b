//! Frequency-based guess scoring
//!
//! A bounded heuristic rather than a full information-theoretic search: only
//! the first `search_limit` candidates are scored, trading completeness for
//! responsiveness.

use super::engine::Solver;
use super::frequency::FrequencyTables;
use super::strategy::HeuristicStrategy;
use crate::core::{ALPHABET_SIZE, EngineError, GuessRecord, Word, letter_from_index};

/// Default number of candidates scored per turn
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Default opening words, in order of preference
pub const DEFAULT_OPENERS: &[&str] = &[
    "adieu", "audio", "orate", "arise", "raise", "slate", "trace", "crate", "stare",
];

/// Points per distinct letter in a word
const DISTINCT_LETTER_BONUS: f64 = 10.0;

/// Multiplier applied to positional frequencies
const POSITIONAL_WEIGHT: f64 = 2.0;

/// Tunable policy for the heuristic scorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerConfig {
    /// How many leading candidates are scored
    pub search_limit: usize,
    /// Preferred first guesses, tried in order
    pub openers: Vec<Word>,
}

impl ScorerConfig {
    #[must_use]
    pub const fn new(search_limit: usize, openers: Vec<Word>) -> Self {
        Self {
            search_limit,
            openers,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SEARCH_LIMIT,
            DEFAULT_OPENERS
                .iter()
                .filter_map(|w| Word::new(w).ok())
                .collect(),
        )
    }
}

/// Components of a heuristic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Number of distinct letters in the word
    pub distinct_letters: usize,
    /// Sum of letter frequencies over distinct letters
    pub letter_score: f64,
    /// Sum of positional frequencies, before weighting
    pub positional_score: f64,
}

impl ScoreBreakdown {
    /// Compute the components for `word`
    #[must_use]
    pub fn compute(word: &Word, tables: &FrequencyTables) -> Self {
        let counts = word.letter_counts();

        let distinct_letters = counts.iter().filter(|&&c| c > 0).count();
        let letter_score: f64 = (0..ALPHABET_SIZE)
            .filter(|&i| counts[i] > 0)
            .map(|i| tables.letters.get(letter_from_index(i)))
            .sum();
        let positional_score: f64 = word
            .chars()
            .iter()
            .enumerate()
            .map(|(position, &ch)| tables.positions.get(position, ch))
            .sum();

        Self {
            distinct_letters,
            letter_score,
            positional_score,
        }
    }

    #[must_use]
    pub fn distinct_bonus(&self) -> f64 {
        DISTINCT_LETTER_BONUS * self.distinct_letters as f64
    }

    #[must_use]
    pub fn weighted_positional(&self) -> f64 {
        POSITIONAL_WEIGHT * self.positional_score
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.distinct_bonus() + self.letter_score + self.weighted_positional()
    }
}

/// Score a word against frequency tables of the current candidates
///
/// `10 × distinct letters + Σ letter frequency of distinct letters
///  + 2 × Σ positional frequency of each letter in place`
#[must_use]
pub fn score_word(word: &Word, tables: &FrequencyTables) -> f64 {
    ScoreBreakdown::compute(word, tables).total()
}

/// Pick the highest-scoring word among the first `search_limit` candidates
///
/// Only a strictly higher score replaces the current best, so ties keep the
/// earliest candidate. Returns `None` if `candidates` is empty.
#[must_use]
pub fn select_best_guess<'a>(
    candidates: &'a [Word],
    tables: &FrequencyTables,
    search_limit: usize,
) -> Option<(&'a Word, f64)> {
    let mut best: Option<(&'a Word, f64)> = None;

    for word in candidates.iter().take(search_limit.max(1)) {
        let score = score_word(word, tables);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((word, score)),
        }
    }

    best
}

/// Recommend the next guess with the default heuristic policy
///
/// Shorthand for a [`Solver`] over [`HeuristicStrategy::default`]; build a
/// solver directly to use a custom [`ScorerConfig`].
///
/// Frequency tables are computed over `candidates`, the current candidate set.
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_optimizer::core::Word;
/// use wordle_optimizer::solver::recommend;
///
/// let candidates = vec![Word::new("crate").unwrap()];
/// assert_eq!(recommend(&candidates, &[]).unwrap().text(), "crate");
/// ```
pub fn recommend<'a>(
    candidates: &'a [Word],
    history: &[GuessRecord],
) -> Result<&'a Word, EngineError> {
    Solver::new(HeuristicStrategy::default()).recommend(candidates, history)
}
