//! Game session state machine
//!
//! A session owns one game: the hidden target, the shrinking candidate set,
//! the guess history and the current recommendation. It moves from
//! `InProgress` to `Won` or `Lost` and never leaves a terminal state.
//!
//! Sessions are driven by a single caller; concurrent `submit_guess` calls on
//! one session are not supported.

use super::error::GameError;
use super::target::{GameMode, TargetOrigin, TargetSelection};
use crate::core::{Dictionary, Feedback, GuessRecord, MAX_ATTEMPTS, Word};
use crate::solver::{FrequencyTables, Solver, StrategyType};
use log::{debug, info};
use std::fmt;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What the player is told to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// Suggested next guess
    Guess(Word),
    /// The game was won
    Solved,
    /// The game was lost; the target is revealed
    Revealed(Word),
    /// Feedback ruled out every dictionary word
    NoCandidates,
}

impl Recommendation {
    /// The suggested word, if any
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Guess(word) => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(word) => write!(f, "{}", word.text().to_uppercase()),
            Self::Solved => write!(f, "🎉 Congratulations! You solved it!"),
            Self::Revealed(word) => {
                write!(f, "😔 Game over! The word was: {}", word.text().to_uppercase())
            }
            Self::NoCandidates => write!(
                f,
                "No remaining possibilities: the word is not in the word list"
            ),
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
    pub recommendation: Recommendation,
}

/// One game against a hidden target
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    dictionary_tables: FrequencyTables,
    solver: Solver<StrategyType>,
    mode: GameMode,
    origin: TargetOrigin,
    target: Option<Word>,
    candidates: Vec<Word>,
    tables: FrequencyTables,
    history: Vec<GuessRecord>,
    turn: usize,
    status: GameStatus,
    recommendation: Recommendation,
}

impl<'a> GameSession<'a> {
    /// Start a game with the given target selection
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        strategy: StrategyType,
        selection: TargetSelection,
    ) -> Self {
        let dictionary_tables = FrequencyTables::compute(dictionary.words());
        let mut session = Self {
            dictionary,
            dictionary_tables,
            solver: Solver::new(strategy),
            mode: selection.mode,
            origin: selection.origin,
            target: None,
            candidates: Vec::new(),
            tables: dictionary_tables,
            history: Vec::new(),
            turn: 1,
            status: GameStatus::InProgress,
            recommendation: Recommendation::NoCandidates,
        };
        session.reset(selection);
        session
    }

    /// Start a game against a known target
    #[must_use]
    pub fn with_target(dictionary: &'a Dictionary, strategy: StrategyType, target: Word) -> Self {
        Self::new(dictionary, strategy, TargetSelection::fixed(target))
    }

    /// Throw away the current game and start over with a fresh target
    pub fn reset(&mut self, selection: TargetSelection) {
        self.mode = selection.mode;
        self.origin = selection.origin;
        self.target = selection.target;
        self.candidates = self.dictionary.words().to_vec();
        self.tables = self.dictionary_tables;
        self.history.clear();
        self.turn = 1;
        self.status = GameStatus::InProgress;
        self.recommendation = self.next_recommendation();
        debug!(
            "New {} game with {} candidates",
            self.mode,
            self.candidates.len()
        );
    }

    /// Supply the target for a manual game
    ///
    /// # Errors
    /// Returns `InvalidLength`/`InvalidCharacters` for a malformed word,
    /// `TargetLocked` once a guess has been made, and `GameOver` after the
    /// game ended.
    pub fn set_target(&mut self, input: &str) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.history.is_empty() {
            return Err(GameError::TargetLocked);
        }

        let word = Word::new(input)?;
        if !self.dictionary.contains(&word) {
            log::warn!("Manual target '{word}' is not in the word list, using it anyway");
        }
        self.target = Some(word);
        self.origin = TargetOrigin::Manual;
        Ok(())
    }

    /// Play one guess
    ///
    /// On success the guess is recorded, the status advances, and unless the
    /// game just ended the candidates are narrowed and a new recommendation
    /// is computed.
    ///
    /// # Errors
    /// Returns `GameOver` after the game ended, `TargetNotSet` for a manual game
    /// without a target, `InvalidLength`/`InvalidCharacters` for malformed
    /// input and `UnknownWord` for words outside the dictionary. The session
    /// is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimizer::core::{Dictionary, Word};
    /// use wordle_optimizer::game::{GameSession, GameStatus};
    /// use wordle_optimizer::solver::StrategyType;
    ///
    /// let dictionary = Dictionary::from_lines(["apple", "erase", "crate"]);
    /// let target = Word::new("erase").unwrap();
    /// let mut session = GameSession::with_target(&dictionary, StrategyType::default(), target);
    ///
    /// let outcome = session.submit_guess("apple").unwrap();
    /// assert_eq!(outcome.feedback.to_string(), "YBBBG");
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    /// ```
    pub fn submit_guess(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        let Some(target) = self.target.clone() else {
            return Err(GameError::TargetNotSet);
        };

        let guess = Word::new(input)?;
        if !self.dictionary.contains(&guess) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &target);
        self.history
            .push(GuessRecord::new(guess.clone(), feedback, self.turn));

        if feedback.is_win() {
            self.status = GameStatus::Won;
            self.recommendation = Recommendation::Solved;
            info!("Solved in {} guesses", self.turn);
        } else if self.turn >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.recommendation = Recommendation::Revealed(target);
            info!("Out of guesses after {} turns", self.turn);
        } else {
            let narrowed = self.solver.narrow(&self.candidates, &guess, feedback);
            self.candidates = narrowed.candidates;
            self.tables = narrowed.tables;
            self.recommendation = self.next_recommendation();
            self.turn += 1;
        }

        Ok(TurnOutcome {
            feedback,
            status: self.status,
            recommendation: self.recommendation.clone(),
        })
    }

    fn next_recommendation(&self) -> Recommendation {
        self.solver
            .recommend_with(&self.candidates, &self.tables, &self.history)
            .map_or(Recommendation::NoCandidates, |word| {
                Recommendation::Guess(word.clone())
            })
    }

    /// Words still consistent with every guess so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Frequency tables of the current candidates
    #[must_use]
    pub const fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Current 1-based turn
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn origin(&self) -> TargetOrigin {
        self.origin
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Whether a target has been set
    #[must_use]
    pub const fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            self.target.as_ref()
        } else {
            None
        }
    }
}
