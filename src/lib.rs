//! Wordle Optimizer
//!
//! A Wordle helper: scores guesses against a hidden word, narrows the set of
//! words still consistent with all feedback, and recommends the next guess
//! with a letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_optimizer::core::{Dictionary, Feedback, Word};
//! use wordle_optimizer::solver::{filter, recommend};
//!
//! let dictionary = Dictionary::from_lines(["apple", "erase", "crate", "slate"]);
//!
//! // Score a guess
//! let guess = Word::new("apple").unwrap();
//! let target = Word::new("erase").unwrap();
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.to_string(), "YBBBG");
//!
//! // Narrow the candidates and ask for the next guess
//! let remaining = filter(dictionary.words(), &guess, feedback);
//! let next = recommend(&remaining, &[]).unwrap();
//! assert!(remaining.contains(next));
//! ```

// Core domain types
pub mod core;

// Frequency analysis, filtering and guess selection
pub mod solver;

// Game sessions and target selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
