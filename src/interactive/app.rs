//! TUI application state and logic

use crate::core::{Dictionary, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{
    GameMode, GameSession, GameStatus, Recommendation, TargetSelection, TargetSource,
    select_target,
};
use crate::solver::StrategyType;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Modes offered on the start screen, in display order
pub const MODES: [GameMode; 3] = [GameMode::Random, GameMode::Daily, GameMode::Manual];

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub targets: Box<dyn TargetSource + 'a>,
    pub input_mode: InputMode,
    /// Index into `MODES` highlighted on the start screen
    pub mode_cursor: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Start screen: pick random, daily or manual
    ModeSelect,
    /// Manual game: typing the hidden word
    TargetEntry,
    /// Typing guesses
    Guess,
    /// Won or lost; waiting for a new game
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        strategy: StrategyType,
        targets: Box<dyn TargetSource + 'a>,
    ) -> Self {
        Self {
            session: GameSession::new(dictionary, strategy, TargetSelection::deferred()),
            targets,
            input_mode: InputMode::ModeSelect,
            mode_cursor: 0,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick a game mode and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Mode currently highlighted on the start screen
    #[must_use]
    pub const fn selected_mode(&self) -> GameMode {
        MODES[self.mode_cursor]
    }

    /// Start a new game in `mode`
    pub fn start_game(&mut self, mode: GameMode) {
        let dictionary = self.session.dictionary();
        let selection = select_target(mode, dictionary, self.targets.as_mut());
        let notice = selection.notice.clone();
        let has_target = selection.target.is_some();

        self.session.reset(selection);
        self.input_buffer.clear();
        self.messages.clear();

        if let Some(notice) = notice {
            self.add_message(&notice, MessageStyle::Error);
        }

        match (mode, has_target) {
            (GameMode::Manual, _) => {
                self.input_mode = InputMode::TargetEntry;
                self.add_message("Enter the hidden word for the guesser.", MessageStyle::Info);
            }
            (_, true) => {
                self.input_mode = InputMode::Guess;
                self.add_message(
                    &format!("New {mode} game started. Good luck!"),
                    MessageStyle::Info,
                );
            }
            (_, false) => {
                self.input_mode = InputMode::ModeSelect;
            }
        }
    }

    /// Back to the start screen
    pub fn back_to_menu(&mut self) {
        self.input_mode = InputMode::ModeSelect;
        self.input_buffer.clear();
        self.add_message("Pick a game mode and press Enter.", MessageStyle::Info);
    }

    fn submit_target(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.session.set_target(&input) {
            Ok(()) => {
                self.input_mode = InputMode::Guess;
                self.add_message("Target set. Start guessing!", MessageStyle::Success);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit_guess(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.status {
                    GameStatus::InProgress => {
                        let remaining = self.session.candidates().len();
                        let style = if remaining == 0 {
                            MessageStyle::Error
                        } else {
                            MessageStyle::Info
                        };
                        self.add_message(
                            &format!("{} {remaining} possibilities remaining", outcome.feedback),
                            style,
                        );
                    }
                    GameStatus::Won => {
                        self.record_game(true);
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &outcome.recommendation.to_string(),
                            MessageStyle::Success,
                        );
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.record_game(false);
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &outcome.recommendation.to_string(),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            let guesses = self.session.history().len();
            if guesses <= MAX_ATTEMPTS {
                self.stats.guess_distribution[guesses] += 1;
            }
        }
    }

    /// Copy the recommended guess into the input line
    pub fn accept_recommendation(&mut self) {
        if let Recommendation::Guess(word) = self.session.recommendation() {
            self.input_buffer = word.text().to_string();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ModeSelect => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Left => {
                    self.mode_cursor = (self.mode_cursor + MODES.len() - 1) % MODES.len();
                }
                KeyCode::Down | KeyCode::Right => {
                    self.mode_cursor = (self.mode_cursor + 1) % MODES.len();
                }
                KeyCode::Char('r') => self.start_game(GameMode::Random),
                KeyCode::Char('d') => self.start_game(GameMode::Daily),
                KeyCode::Char('m') => self.start_game(GameMode::Manual),
                KeyCode::Enter => self.start_game(self.selected_mode()),
                _ => {}
            },
            InputMode::TargetEntry => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_target(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Tab => self.accept_recommendation(),
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.back_to_menu(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedDailyWord, SystemTargets};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["crate", "slate", "irate", "apple", "erase"])
    }

    fn app<'a>(dictionary: &'a Dictionary, daily: Option<&str>) -> App<'a> {
        let targets = SystemTargets::with_rng(
            StdRng::seed_from_u64(11),
            Box::new(FixedDailyWord(daily.map(str::to_string))),
        );
        App::new(dictionary, StrategyType::default(), Box::new(targets))
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_on_mode_selection() {
        let dictionary = dictionary();
        let app = app(&dictionary, None);
        assert_eq!(app.input_mode, InputMode::ModeSelect);
        assert_eq!(app.selected_mode(), GameMode::Random);
    }

    #[test]
    fn mode_cursor_wraps() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, None);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_mode(), GameMode::Manual);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_mode(), GameMode::Daily);
    }

    #[test]
    fn daily_game_win_updates_stats() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("erase"));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.input_mode, InputMode::Guess);

        type_word(&mut app, "apple");
        assert_eq!(app.session.turn(), 2);
        type_word(&mut app, "erase");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_guess_keeps_turn() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("erase"));
        press(&mut app, KeyCode::Char('d'));

        type_word(&mut app, "abc");
        assert!(app.messages.last().unwrap().text.contains("5-letter"));
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_word(&mut app, "zebra");

        assert_eq!(app.session.turn(), 1);
        assert_eq!(
            app.messages.last().unwrap().text,
            "'zebra' is not in the word list"
        );
        // Rejected input stays editable
        assert_eq!(app.input_buffer, "zebra");
    }

    #[test]
    fn input_is_limited_to_five_letters() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("erase"));
        press(&mut app, KeyCode::Char('d'));

        for c in "apples1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "apple");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "appl");
    }

    #[test]
    fn tab_accepts_recommendation() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("erase"));
        press(&mut app, KeyCode::Char('d'));

        press(&mut app, KeyCode::Tab);
        // SLATE is the first configured opener in this dictionary
        assert_eq!(app.input_buffer, "slate");
    }

    #[test]
    fn manual_game_asks_for_target() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, None);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.input_mode, InputMode::TargetEntry);

        type_word(&mut app, "irate");
        assert_eq!(app.input_mode, InputMode::Guess);
        type_word(&mut app, "irate");
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn losing_game_counts_as_played() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("erase"));
        press(&mut app, KeyCode::Char('d'));

        for guess in ["apple", "crate", "slate", "irate", "apple", "crate"] {
            type_word(&mut app, guess);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was: ERASE"))
        );
    }

    #[test]
    fn daily_failure_shows_notice_and_plays_random() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, None);
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.messages.iter().any(|m| m.text.contains("random word")));
    }

    #[test]
    fn new_game_returns_to_menu() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("crate"));
        press(&mut app, KeyCode::Char('d'));
        type_word(&mut app, "crate");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::ModeSelect);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let dictionary = dictionary();
        let mut app = app(&dictionary, Some("crate"));
        press(&mut app, KeyCode::Char('d'));

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
