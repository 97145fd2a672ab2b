//! Word lists for Wordle solving
//!
//! Provides the embedded dictionary compiled into the binary and loaders for
//! custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;

/// Build the dictionary from the embedded word list
///
/// # Examples
/// ```
/// use wordle_optimizer::wordlists::embedded_dictionary;
///
/// let dictionary = embedded_dictionary();
/// assert!(dictionary.contains_str("crate"));
/// ```
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::from_lines(WORDS)
}
