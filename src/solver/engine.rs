//! Main solver interface

use super::filter::{filter, filter_history};
use super::frequency::FrequencyTables;
use super::strategy::Strategy;
use crate::core::{EngineError, Feedback, GuessRecord, Word};
use log::debug;

/// Result of narrowing a candidate set with one guess
#[derive(Debug, Clone)]
pub struct Narrowed {
    pub candidates: Vec<Word>,
    pub tables: FrequencyTables,
}

/// Main Wordle solver
///
/// Binds a guess selection strategy to the filtering and frequency engine.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Recommend the next guess, computing frequency tables over `candidates`
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if no candidates remain.
    pub fn recommend<'a>(
        &self,
        candidates: &'a [Word],
        history: &[GuessRecord],
    ) -> Result<&'a Word, EngineError> {
        let tables = FrequencyTables::compute(candidates);
        self.recommend_with(candidates, &tables, history)
    }

    /// Recommend using tables already computed for `candidates`
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if no candidates remain.
    pub fn recommend_with<'a>(
        &self,
        candidates: &'a [Word],
        tables: &FrequencyTables,
        history: &[GuessRecord],
    ) -> Result<&'a Word, EngineError> {
        self.strategy
            .select_guess(candidates, tables, history)
            .ok_or(EngineError::EmptyCandidateSet)
    }

    /// Narrow `candidates` with one guess and recompute frequency tables
    #[must_use]
    pub fn narrow(&self, candidates: &[Word], guess: &Word, feedback: Feedback) -> Narrowed {
        let remaining = filter(candidates, guess, feedback);
        debug!(
            "{guess} {feedback}: {} -> {} candidates",
            candidates.len(),
            remaining.len()
        );
        let tables = FrequencyTables::compute(&remaining);
        Narrowed {
            candidates: remaining,
            tables,
        }
    }

    /// Replay a whole history over a word universe
    #[must_use]
    pub fn candidates_for(&self, words: &[Word], history: &[GuessRecord]) -> Vec<Word> {
        filter_history(words, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::HeuristicStrategy;

    fn setup() -> Vec<Word> {
        ["crane", "slate", "irate", "crate", "grate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn recommend_returns_candidate() {
        let words = setup();
        let solver = Solver::new(HeuristicStrategy::default());

        let guess = solver.recommend(&words, &[]).unwrap();
        assert!(words.contains(guess));
        // SLATE and CRATE are both openers; SLATE is listed first
        assert_eq!(guess.text(), "slate");
    }

    #[test]
    fn recommend_empty_is_error() {
        let solver = Solver::new(HeuristicStrategy::default());
        assert_eq!(solver.recommend(&[], &[]), Err(EngineError::EmptyCandidateSet));
    }

    #[test]
    fn narrow_filters_and_recomputes() {
        let words = setup();
        let solver = Solver::new(HeuristicStrategy::default());
        let guess = Word::new("crane").unwrap();
        let target = Word::new("grate").unwrap();

        let narrowed = solver.narrow(&words, &guess, Feedback::evaluate(&guess, &target));
        assert!(narrowed.candidates.contains(&target));
        assert!(narrowed.candidates.len() < words.len());
        assert_eq!(narrowed.tables, FrequencyTables::compute(&narrowed.candidates));
    }

    #[test]
    fn candidates_for_replays_history() {
        let words = setup();
        let solver = Solver::new(HeuristicStrategy::default());
        let target = Word::new("irate").unwrap();

        let history: Vec<GuessRecord> = ["crane", "slate"]
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let guess = Word::new(g).unwrap();
                let feedback = Feedback::evaluate(&guess, &target);
                GuessRecord::new(guess, feedback, i + 1)
            })
            .collect();

        let remaining = solver.candidates_for(&words, &history);
        assert!(remaining.contains(&target));
        assert!(!remaining.iter().any(|w| w.text() == "crane"));
    }
}
