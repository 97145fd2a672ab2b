//! Assistant mode for a game played elsewhere
//!
//! The player types each guess with the feedback the real game showed
//! (`crane BYBBG`). The assistant replays the whole history over the
//! dictionary and suggests the next word.

use crate::core::{Dictionary, EngineError, Feedback, GuessRecord, MAX_ATTEMPTS, Word, WordError};
use crate::output::formatters::{guess_tiles, word_list};
use crate::solver::{Solver, StrategyType};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Remaining possibilities are listed at or below this count
const SHOW_REMAINING: usize = 10;

/// Rejected assistant input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistError {
    #[error("Enter a guess followed by its feedback, e.g. 'crane BYBBG'")]
    MissingFeedback,
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] EngineError),
}

/// Parse a `word feedback` line such as `crane BYBBG` or `crane 🟩🟨⬜⬜⬜`
///
/// # Errors
///
/// Returns `AssistError` if either part is missing or malformed.
pub fn parse_turn(line: &str) -> Result<(Word, Feedback), AssistError> {
    let mut parts = line.split_whitespace();
    let (Some(word), Some(feedback), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AssistError::MissingFeedback);
    };
    Ok((Word::new(word)?, feedback.parse()?))
}

/// Candidates and history of a game being played elsewhere
pub struct Assistant<'a> {
    dictionary: &'a Dictionary,
    solver: Solver<StrategyType>,
    history: Vec<GuessRecord>,
    candidates: Vec<Word>,
}

impl<'a> Assistant<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, strategy: StrategyType) -> Self {
        Self {
            dictionary,
            solver: Solver::new(strategy),
            history: Vec::new(),
            candidates: dictionary.words().to_vec(),
        }
    }

    /// Record one turn of the real game
    pub fn record(&mut self, word: Word, feedback: Feedback) {
        let turn = self.history.len() + 1;
        self.history.push(GuessRecord::new(word, feedback, turn));
        self.replay();
    }

    /// Drop the latest turn; `false` if there was none
    pub fn undo(&mut self) -> bool {
        let undone = self.history.pop().is_some();
        self.replay();
        undone
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.replay();
    }

    fn replay(&mut self) {
        self.candidates = self
            .solver
            .candidates_for(self.dictionary.words(), &self.history);
    }

    /// Suggested next guess, `None` once no word fits the feedback
    #[must_use]
    pub fn suggestion(&self) -> Option<&Word> {
        self.solver.recommend(&self.candidates, &self.history).ok()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Whether the latest turn was all hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|r| r.feedback().is_win())
    }
}

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_assist(dictionary: &Dictionary, strategy: StrategyType) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_assist_with(&mut stdin.lock(), &mut stdout.lock(), dictionary, strategy)
}

/// Run the assistant over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    dictionary: &Dictionary,
    strategy: StrategyType,
) -> io::Result<()> {
    writeln!(out, "\nEnter each guess with its feedback (G = green, Y = yellow, B = gray).")?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    let mut assistant = Assistant::new(dictionary, strategy);

    loop {
        print_suggestion(out, &assistant)?;

        let label = format!("Turn {}/{MAX_ATTEMPTS}", assistant.history().len() + 1);
        write!(out, "{label}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                assistant.clear();
                writeln!(out, "🔄 New game\n")?;
                continue;
            }
            "undo" | "u" => {
                if !assistant.undo() {
                    writeln!(out, "Nothing to undo.\n")?;
                }
                continue;
            }
            _ => {}
        }

        match parse_turn(&line) {
            Ok((word, feedback)) => {
                writeln!(out, "\n  {}\n", guess_tiles(&word, feedback))?;
                assistant.record(word, feedback);
            }
            Err(err) => {
                writeln!(out, "❌ {err}\n")?;
                continue;
            }
        }

        if assistant.is_solved() {
            writeln!(
                out,
                "{}\n",
                format!("🎉 Solved in {}!", assistant.history().len())
                    .bright_green()
                    .bold()
            )?;
            assistant.clear();
        } else if assistant.history().len() >= MAX_ATTEMPTS {
            writeln!(out, "{}\n", "Out of attempts. Starting over.".yellow())?;
            assistant.clear();
        }
    }

    writeln!(out, "\n👋 Good luck!\n")?;
    Ok(())
}

fn print_suggestion<W: Write>(out: &mut W, assistant: &Assistant<'_>) -> io::Result<()> {
    let candidates = assistant.candidates();
    writeln!(out, "{} possibilities remaining", candidates.len())?;

    match assistant.suggestion() {
        Some(word) => writeln!(
            out,
            "💡 Suggested guess: {}",
            word.text().to_uppercase().bright_green().bold()
        )?,
        None => writeln!(
            out,
            "{}",
            "No word in the list fits this feedback. Check it or type 'undo'.".red()
        )?,
    }

    if !candidates.is_empty() && candidates.len() <= SHOW_REMAINING {
        writeln!(
            out,
            "Remaining possibilities: {}",
            word_list(candidates, SHOW_REMAINING)
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["crate", "slate", "irate", "apple", "erase"])
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn run(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_assist_with(&mut input, &mut output, &dictionary(), StrategyType::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_turn_accepts_codes_and_emoji() {
        let (word, feedback) = parse_turn("Apple ybbbg").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(feedback.to_string(), "YBBBG");

        let (_, emoji) = parse_turn("crate 🟩🟩⬜⬜🟨").unwrap();
        assert_eq!(emoji.to_string(), "GGBBY");
    }

    #[test]
    fn parse_turn_rejects_malformed_lines() {
        assert_eq!(parse_turn("apple"), Err(AssistError::MissingFeedback));
        assert_eq!(parse_turn("apple GGGGG extra"), Err(AssistError::MissingFeedback));
        assert_eq!(
            parse_turn("appl GGGGG"),
            Err(AssistError::Word(WordError::InvalidLength(4)))
        );
        assert!(matches!(
            parse_turn("apple GGXGG"),
            Err(AssistError::Feedback(EngineError::InvalidInput(_)))
        ));
    }

    #[test]
    fn recording_feedback_narrows_candidates() {
        let dictionary = dictionary();
        let mut assistant = Assistant::new(&dictionary, StrategyType::default());
        let (word, feedback) = parse_turn("apple YBBBG").unwrap();
        assistant.record(word, feedback);

        assert_eq!(texts(assistant.candidates()), vec!["crate", "irate", "erase"]);
        assert!(!assistant.is_solved());
        assert!(assistant.suggestion().is_some());
    }

    #[test]
    fn undo_replays_remaining_history() {
        let dictionary = dictionary();
        let mut assistant = Assistant::new(&dictionary, StrategyType::default());
        let (word, feedback) = parse_turn("apple YBBBG").unwrap();
        assistant.record(word, feedback);
        let (word, feedback) = parse_turn("crate BGGBG").unwrap();
        assistant.record(word, feedback);
        assert_eq!(texts(assistant.candidates()), vec!["erase"]);

        assert!(assistant.undo());
        assert_eq!(texts(assistant.candidates()), vec!["crate", "irate", "erase"]);
        assert!(assistant.undo());
        assert_eq!(assistant.candidates().len(), dictionary.len());
        assert!(!assistant.undo());
    }

    #[test]
    fn contradictory_feedback_has_no_suggestion() {
        let dictionary = dictionary();
        let mut assistant = Assistant::new(&dictionary, StrategyType::default());
        let (word, feedback) = parse_turn("crate GGGGB").unwrap();
        assistant.record(word, feedback);

        assert!(assistant.candidates().is_empty());
        assert!(assistant.suggestion().is_none());
    }

    #[test]
    fn session_reports_solved_game() {
        let output = run("apple YBBBG\nerase GGGGG\nquit\n");

        assert!(output.contains("Remaining possibilities: CRATE, IRATE, ERASE"));
        assert!(output.contains("Solved in 2"));
        assert!(output.contains("Good luck"));
    }

    #[test]
    fn session_reports_bad_input() {
        let output = run("apple\nfoo\n");
        assert!(output.contains("Enter a guess followed by its feedback"));
        assert!(output.contains("Turn 1/6"));
        assert!(!output.contains("Turn 2/6"));
    }
}
