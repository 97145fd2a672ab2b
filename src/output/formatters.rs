//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, symbol: FeedbackSymbol) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match symbol {
        FeedbackSymbol::Hit => text.black().on_green().bold(),
        FeedbackSymbol::Present => text.black().on_yellow().bold(),
        FeedbackSymbol::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, &symbol)| letter_tile(letter, symbol).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: value is clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter percentage as a bar scaled to the most common letter
#[must_use]
pub fn frequency_bar(percentage: f64, top: f64, width: usize) -> String {
    create_progress_bar(percentage, top, width)
}

/// Comma separated uppercase words, `limit` at most
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback: Feedback = "GYBBG".parse().unwrap();
        assert_eq!(feedback_to_emoji(feedback), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn feedback_to_emoji_all_green() {
        assert_eq!(feedback_to_emoji(Feedback::ALL_HIT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn guess_tiles_contains_letters_in_order() {
        let word = Word::new("crate").unwrap();
        let tiles = guess_tiles(&word, Feedback::ALL_HIT);

        let positions: Vec<usize> = ["C", "R", "A", "T", "E"]
            .iter()
            .map(|l| tiles.find(l).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn word_list_truncates() {
        let words: Vec<Word> = ["crate", "slate", "irate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        assert_eq!(word_list(&words, 2), "CRATE, SLATE");
    }
}
