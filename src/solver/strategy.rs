//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Strategies only
//! decide which candidate to play; feedback and filtering stay in the core.

use super::frequency::FrequencyTables;
use super::scorer::{ScorerConfig, select_best_guess};
use crate::core::{GuessRecord, Word};

/// A strategy for selecting the next guess from the current candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// `tables` are the frequency tables of `candidates`. Returns `None` only
    /// when `candidates` is empty.
    fn select_guess<'a>(
        &self,
        candidates: &'a [Word],
        tables: &FrequencyTables,
        history: &[GuessRecord],
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Frequency heuristic (default)
    Heuristic(HeuristicStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Word],
        tables: &FrequencyTables,
        history: &[GuessRecord],
    ) -> Option<&'a Word> {
        match self {
            Self::Heuristic(s) => s.select_guess(candidates, tables, history),
            Self::Random(s) => s.select_guess(candidates, tables, history),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "heuristic", "random". Defaults to heuristic if the
    /// name is unrecognized; `config` only applies to the heuristic.
    #[must_use]
    pub fn from_name(name: &str, config: ScorerConfig) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Heuristic(HeuristicStrategy::new(config)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heuristic(_) => "heuristic",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Heuristic(HeuristicStrategy::default())
    }
}

/// Letter-frequency heuristic
///
/// - A single remaining candidate is always played.
/// - On the first turn, the first configured opener present among the
///   candidates is played.
/// - Otherwise the best-scoring of the first `search_limit` candidates wins.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy {
    config: ScorerConfig,
}

impl HeuristicStrategy {
    #[must_use]
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }
}

impl Strategy for HeuristicStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Word],
        tables: &FrequencyTables,
        history: &[GuessRecord],
    ) -> Option<&'a Word> {
        if let [only] = candidates {
            return Some(only);
        }

        if history.is_empty()
            && let Some(opener) = self
                .config
                .openers
                .iter()
                .find_map(|opener| candidates.iter().find(|c| *c == opener))
        {
            return Some(opener);
        }

        select_best_guess(candidates, tables, self.config.search_limit).map(|(word, _)| word)
    }
}

/// Random strategy
///
/// Picks uniformly among the candidates. Mostly useful as a baseline for
/// benchmarking the heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a [Word],
        _tables: &FrequencyTables,
        _history: &[GuessRecord],
    ) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn history() -> Vec<GuessRecord> {
        vec![GuessRecord::new(
            Word::new("crane").unwrap(),
            Feedback::ALL_HIT,
            1,
        )]
    }

    #[test]
    fn heuristic_custom_openers() {
        let candidates = words(&["crate", "slate", "mamma"]);
        let tables = FrequencyTables::compute(&candidates);
        let strategy = HeuristicStrategy::new(ScorerConfig::new(100, words(&["mamma"])));

        let guess = strategy.select_guess(&candidates, &tables, &[]).unwrap();
        assert_eq!(guess.text(), "mamma");
    }

    #[test]
    fn heuristic_falls_through_without_opener() {
        let candidates = words(&["mamma", "grate", "irate"]);
        let tables = FrequencyTables::compute(&candidates);
        let strategy = HeuristicStrategy::default();

        let guess = strategy.select_guess(&candidates, &tables, &[]).unwrap();
        assert_ne!(guess.text(), "mamma");
    }

    #[test]
    fn heuristic_singleton_wins_over_opener() {
        let candidates = words(&["mamma"]);
        let tables = FrequencyTables::compute(&candidates);
        let strategy = HeuristicStrategy::default();

        assert_eq!(
            strategy.select_guess(&candidates, &tables, &[]).unwrap().text(),
            "mamma"
        );
        assert_eq!(
            strategy
                .select_guess(&candidates, &tables, &history())
                .unwrap()
                .text(),
            "mamma"
        );
    }

    #[test]
    fn random_selects_from_candidates() {
        let candidates = words(&["crate", "slate", "irate"]);
        let tables = FrequencyTables::compute(&candidates);

        for _ in 0..20 {
            let guess = RandomStrategy
                .select_guess(&candidates, &tables, &history())
                .unwrap();
            assert!(candidates.contains(guess));
        }
        assert!(RandomStrategy.select_guess(&[], &tables, &[]).is_none());
    }

    #[test]
    fn from_name_selects_strategy() {
        assert_eq!(
            StrategyType::from_name("random", ScorerConfig::default()).name(),
            "random"
        );
        assert_eq!(
            StrategyType::from_name("heuristic", ScorerConfig::default()).name(),
            "heuristic"
        );
        assert_eq!(
            StrategyType::from_name("unknown", ScorerConfig::default()).name(),
            "heuristic"
        );
    }
}
