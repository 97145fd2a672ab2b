//! TUI rendering with ratatui
//!
//! Guess grid, recommendation and letter statistics for a running game.

use super::app::{App, InputMode, MODES, MessageStyle};
use crate::core::{FeedbackSymbol, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameStatus, Recommendation};
use crate::output::formatters::word_list;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Remaining possibilities are listed at or below this count
const SHOW_REMAINING: usize = 10;

/// Letters shown in the frequency panel
const TOP_LETTERS: usize = 8;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Left panel
            Constraint::Percentage(50), // Right panel
        ])
        .split(chunks[1]);

    if app.input_mode == InputMode::ModeSelect {
        render_mode_select(f, app, main_chunks[0]);
    } else {
        render_grid(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE OPTIMIZER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_mode_select(f: &mut Frame, app: &App, area: Rect) {
    let descriptions = [
        "A random word from the word list",
        "Today's word from the daily provider",
        "Someone types the hidden word first",
    ];

    let items: Vec<ListItem> = MODES
        .iter()
        .zip(descriptions)
        .enumerate()
        .map(|(i, (mode, description))| {
            let selected = i == app.mode_cursor;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{marker}{}", mode.to_string().to_uppercase()),
                    style,
                )),
                Line::from(Span::styled(
                    format!("    {description}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose Game Mode ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn tile_style(symbol: FeedbackSymbol) -> Style {
    let bg = match symbol {
        FeedbackSymbol::Hit => Color::Green,
        FeedbackSymbol::Present => Color::Yellow,
        FeedbackSymbol::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for record in history {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &symbol) in record.word().text().chars().zip(record.feedback().symbols()) {
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(symbol),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(format!(" {}", record.feedback())));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.session.status() == GameStatus::InProgress && app.input_mode == InputMode::Guess {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = typed.get(i).map_or('_', char::to_ascii_uppercase);
                [
                    Span::styled(
                        format!(" {letter} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    while lines.len() < MAX_ATTEMPTS * 2 {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let title = format!(" {} game ", app.session.mode());
    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Recommendation
            Constraint::Length(3),      // Candidate gauge
            Constraint::Min(6),         // Letter frequencies
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_recommendation(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_letters(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_recommendation(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut content = match (app.input_mode, session.recommendation()) {
        (InputMode::ModeSelect | InputMode::TargetEntry, _) => {
            vec![Line::from("Start a game to get suggestions")]
        }
        (_, Recommendation::Guess(word)) => vec![Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                word.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],
        (_, Recommendation::Solved) => vec![Line::from(Span::styled(
            Recommendation::Solved.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        (_, other) => vec![Line::from(Span::styled(
            other.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    let candidates = session.candidates();
    if matches!(app.input_mode, InputMode::Guess | InputMode::GameOver)
        && !candidates.is_empty()
        && candidates.len() <= SHOW_REMAINING
    {
        content.push(Line::from(""));
        content.push(Line::from("Remaining possibilities:"));
        content.push(Line::from(Span::styled(
            word_list(candidates, SHOW_REMAINING),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Recommendation ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().len();
    let remaining = app.session.candidates().len();
    let percent = if total > 0 {
        (remaining * 100 / total).min(100) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Candidates ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{remaining} of {total} words possible"));
    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let top = app.session.tables().letters.top(TOP_LETTERS);
    let highest = top.first().map_or(0.0, |&(_, pct)| pct);

    let items: Vec<ListItem> = top
        .into_iter()
        .filter(|&(_, pct)| pct > 0.0)
        .map(|(letter, pct)| {
            let width = if highest > 0.0 {
                (pct / highest * 16.0) as usize
            } else {
                0
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", char::from(letter).to_ascii_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█".repeat(width), Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {pct:.1}%")),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Most Common Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::ModeSelect => (
            " ↑/↓ to choose, Enter to start (r/d/m shortcuts) ",
            "",
            Color::Cyan,
        ),
        InputMode::TargetEntry => (
            " Enter the hidden word (5 letters) | ESC for menu ",
            app.input_buffer.as_str(),
            Color::Magenta,
        ),
        InputMode::Guess => (
            " Enter your guess | TAB to use suggestion | ESC for menu ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver if app.session.status() == GameStatus::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
    };

    // Hide the hidden word while it is typed
    let shown = if app.input_mode == InputMode::TargetEntry {
        "*".repeat(content.len())
    } else {
        content.to_uppercase()
    };

    let input = Paragraph::new(shown)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Mode: {}", app.session.mode());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let turn_text = format!("Turn: {}/{MAX_ATTEMPTS}", app.session.turn());
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[2]);

    let help = Paragraph::new("Ctrl+C: Quit | ESC: Menu")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::game::{FixedDailyWord, SystemTargets};
    use crate::solver::StrategyType;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_mode_selection_and_game() {
        let dictionary = Dictionary::from_lines(["crate", "slate", "irate"]);
        let targets = SystemTargets::with_rng(
            StdRng::seed_from_u64(1),
            Box::new(FixedDailyWord(Some("irate".to_string()))),
        );
        let mut app = App::new(&dictionary, StrategyType::default(), Box::new(targets));

        let menu = screen(&app);
        assert!(menu.contains("WORDLE OPTIMIZER"));
        assert!(menu.contains("Choose Game Mode"));

        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        let game = screen(&app);
        assert!(game.contains("Suggested"));
        assert!(game.contains("SLATE"));
        assert!(game.contains("Most Common Letters"));
    }
}
