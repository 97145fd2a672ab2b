//! Simple interactive CLI mode
//!
//! Text-based game against a hidden target without the TUI. The player
//! types guesses; the session scores them and suggests the next word.

use crate::core::{Dictionary, MAX_ATTEMPTS};
use crate::game::{GameMode, GameSession, GameStatus, Recommendation, TargetSource, select_target};
use crate::output::formatters::{frequency_bar, guess_tiles, word_list};
use crate::solver::StrategyType;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Remaining possibilities are listed at or below this count
const SHOW_REMAINING: usize = 10;

/// Number of most common letters shown with a hint
const HINT_LETTERS: usize = 8;

/// What the player asked for at the guess prompt
enum Command {
    Quit,
    NewGame,
    Hint,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "hint" | "h" | "?" => Self::Hint,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(
    dictionary: &Dictionary,
    strategy: StrategyType,
    mode: GameMode,
    source: &mut dyn TargetSource,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(
        &mut stdin.lock(),
        &mut stdout.lock(),
        dictionary,
        strategy,
        mode,
        source,
    )
}

/// Run the game loop over arbitrary input and output streams
///
/// Ends on `quit`, when the player declines another game, or at end of
/// input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    dictionary: &Dictionary,
    strategy: StrategyType,
    mode: GameMode,
    source: &mut dyn TargetSource,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Optimizer - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden word in {MAX_ATTEMPTS} tries.")?;
    writeln!(out, "Commands: 'hint' for details, 'new' for new game, 'quit' to exit\n")?;

    let selection = select_target(mode, dictionary, source);
    show_notice(out, selection.notice.as_deref())?;
    let mut session = GameSession::new(dictionary, strategy, selection);

    loop {
        writeln!(out, "🔄 New {} game\n", session.mode())?;

        match play_game(input, out, &mut session)? {
            GameEnd::Quit => break,
            GameEnd::NewGame => {}
            GameEnd::Finished => {
                let Some(answer) = prompt(input, out, "Play again? (yes/no)")? else {
                    break;
                };
                if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    break;
                }
            }
        }

        let selection = select_target(mode, dictionary, source);
        show_notice(out, selection.notice.as_deref())?;
        session.reset(selection);
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

enum GameEnd {
    Quit,
    NewGame,
    Finished,
}

fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut GameSession<'_>,
) -> io::Result<GameEnd> {
    if !session.has_target() {
        loop {
            let Some(line) = prompt(input, out, "Enter the target word")? else {
                return Ok(GameEnd::Quit);
            };
            match Command::parse(&line) {
                Command::Quit => return Ok(GameEnd::Quit),
                Command::NewGame => return Ok(GameEnd::NewGame),
                Command::Hint => writeln!(out, "Set the target word first.\n")?,
                Command::Guess(word) => match session.set_target(&word) {
                    Ok(()) => {
                        writeln!(out, "✓ Target set. Hand over to the guesser!\n")?;
                        break;
                    }
                    Err(err) => writeln!(out, "❌ {err}\n")?,
                },
            }
        }
    }

    loop {
        print_status(out, session)?;

        let label = format!("Guess {}/{MAX_ATTEMPTS}", session.turn());
        let Some(line) = prompt(input, out, &label)? else {
            return Ok(GameEnd::Quit);
        };

        match Command::parse(&line) {
            Command::Quit => return Ok(GameEnd::Quit),
            Command::NewGame => return Ok(GameEnd::NewGame),
            Command::Hint => print_hint(out, session)?,
            Command::Guess(word) => match session.submit_guess(&word) {
                Ok(outcome) => {
                    let record = session.history().last();
                    if let Some(record) = record {
                        writeln!(
                            out,
                            "\n  {}  {}\n",
                            guess_tiles(record.word(), outcome.feedback),
                            outcome.feedback
                        )?;
                    }
                    if outcome.status != GameStatus::InProgress {
                        print_ending(out, session)?;
                        return Ok(GameEnd::Finished);
                    }
                }
                Err(err) => writeln!(out, "❌ {err}\n")?,
            },
        }
    }
}

fn show_notice<W: Write>(out: &mut W, notice: Option<&str>) -> io::Result<()> {
    if let Some(notice) = notice {
        writeln!(out, "⚠️  {}\n", notice.yellow())?;
    }
    Ok(())
}

fn print_status<W: Write>(out: &mut W, session: &GameSession<'_>) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Turn {}: {} possibilities remaining",
        session.turn(),
        session.candidates().len()
    )?;
    match session.recommendation() {
        Recommendation::Guess(word) => writeln!(
            out,
            "💡 Suggested guess: {}",
            word.text().to_uppercase().bright_green().bold()
        )?,
        other => writeln!(out, "{}", other.to_string().red())?,
    }

    let candidates = session.candidates();
    if !candidates.is_empty() && candidates.len() <= SHOW_REMAINING {
        writeln!(
            out,
            "Remaining possibilities: {}",
            word_list(candidates, SHOW_REMAINING)
        )?;
    }
    writeln!(out)
}

fn print_hint<W: Write>(out: &mut W, session: &GameSession<'_>) -> io::Result<()> {
    let top = session.tables().letters.top(HINT_LETTERS);
    let Some(&(_, highest)) = top.first() else {
        return Ok(());
    };

    writeln!(out, "\n🔤 Most common letters in remaining words:")?;
    for (letter, pct) in top {
        writeln!(
            out,
            "   {}: {} {pct:4.1}%",
            char::from(letter).to_ascii_uppercase(),
            frequency_bar(pct, highest, 20)
        )?;
    }
    writeln!(out)
}

fn print_ending<W: Write>(out: &mut W, session: &GameSession<'_>) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    let message = session.recommendation().to_string();
    match session.status() {
        GameStatus::Won => writeln!(out, "  {}", message.bright_green().bold())?,
        _ => writeln!(out, "  {}", message.yellow().bold())?,
    }

    writeln!(out, "\n  Guess history:")?;
    for record in session.history() {
        writeln!(
            out,
            "    {}. {} {}",
            record.turn(),
            record.word().text().to_uppercase(),
            record.feedback().to_emoji()
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
