//! Word solving command
//!
//! Lets the solver play a full game against a known target and returns the
//! solution path.

use crate::core::{Dictionary, Feedback, Word};
use crate::game::{GameError, GameSession, GameStatus, Recommendation};
use crate::solver::{StrategyType, filter, score_word};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    /// Set when the solver ran out of consistent candidates
    pub exhausted: bool,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Heuristic score of the guess against the candidates it was chosen from
    pub score: f64,
}

/// Solve a specific word by following the session's recommendations
///
/// # Errors
///
/// Returns an error if the target is not a five-letter word or is not in
/// the dictionary.
pub fn solve_word(
    target: &str,
    dictionary: &Dictionary,
    strategy: StrategyType,
) -> Result<SolveResult, GameError> {
    let target_word = Word::new(target)?;
    if !dictionary.contains(&target_word) {
        return Err(GameError::UnknownWord(target_word.text().to_string()));
    }

    let mut session = GameSession::with_target(dictionary, strategy, target_word.clone());
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut exhausted = false;

    while session.status() == GameStatus::InProgress {
        let Recommendation::Guess(guess) = session.recommendation().clone() else {
            exhausted = true;
            break;
        };

        let candidates_before = session.candidates().len();
        let score = score_word(&guess, session.tables());
        let outcome = session.submit_guess(guess.text())?;

        // A finished game leaves its candidates unfiltered
        let candidates_after = if outcome.status == GameStatus::InProgress {
            session.candidates().len()
        } else {
            filter(session.candidates(), &guess, outcome.feedback).len()
        };

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback: outcome.feedback,
            candidates_before,
            candidates_after,
            score,
        });
    }

    Ok(SolveResult {
        success: session.status() == GameStatus::Won,
        guesses,
        target: target_word.text().to_string(),
        exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::solver::{RandomStrategy, ScorerConfig};
    use crate::wordlists::embedded_dictionary;

    #[test]
    fn solve_word_succeeds() {
        let dictionary = embedded_dictionary();
        let result = solve_word("crate", &dictionary, StrategyType::default()).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= MAX_ATTEMPTS);
        if result.success {
            assert!(result.guesses.last().unwrap().feedback.is_win());
            assert_eq!(result.guesses.last().unwrap().word, "crate");
        }
    }

    #[test]
    fn first_guess_is_opener() {
        let dictionary = embedded_dictionary();
        let result = solve_word("speed", &dictionary, StrategyType::default()).unwrap();
        assert_eq!(result.guesses[0].word, "adieu");
    }

    #[test]
    fn solve_opener_in_one() {
        let dictionary = embedded_dictionary();
        let result = solve_word("adieu", &dictionary, StrategyType::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let dictionary = embedded_dictionary();
        let result = solve_word("geese", &dictionary, StrategyType::default()).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.score > 0.0);
        }
    }

    #[test]
    fn lost_game_reports_consistent_candidates() {
        // Every word scores the same, so guesses follow list order
        let dictionary = Dictionary::from_lines([
            "fight", "light", "might", "night", "right", "sight", "tight", "wight",
        ]);
        let result = solve_word("tight", &dictionary, StrategyType::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), MAX_ATTEMPTS);
        let last = result.guesses.last().unwrap();
        assert_eq!(last.word, "sight");
        assert_eq!(last.candidates_before, 3);
        assert_eq!(last.candidates_after, 2);
    }

    #[test]
    fn solve_with_random_strategy() {
        let dictionary = Dictionary::from_lines(["crate", "slate", "irate"]);
        let strategy = StrategyType::Random(RandomStrategy);
        let result = solve_word("irate", &dictionary, strategy).unwrap();

        assert!(result.success);
        assert!(result.guesses.len() <= 3);
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let dictionary = embedded_dictionary();
        let result = solve_word("zzzzz", &dictionary, StrategyType::default());
        assert!(matches!(result, Err(GameError::UnknownWord(_))));
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = embedded_dictionary();
        let strategy = StrategyType::from_name("heuristic", ScorerConfig::default());
        assert_eq!(
            solve_word("abc", &dictionary, strategy).err(),
            Some(GameError::InvalidLength(3))
        );
    }
}
