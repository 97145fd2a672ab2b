//! Letter frequency analysis over a word set
//!
//! Tables are fixed-size arrays keyed by alphabet index and are recomputed
//! from scratch for every word set. At dictionary sizes in the low thousands
//! this is cheap enough to do on every turn.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_from_index, letter_index};

/// Share of all letter slots taken by each letter, as a percentage
///
/// Every occurrence counts, so a word with a doubled letter contributes twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrequencies([f64; ALPHABET_SIZE]);

impl LetterFrequencies {
    /// Compute over all letter slots of all words
    ///
    /// An empty word set yields an all-zero table.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimizer::core::Word;
    /// use wordle_optimizer::solver::LetterFrequencies;
    ///
    /// let words = vec![Word::new("aaaaa").unwrap()];
    /// let table = LetterFrequencies::compute(&words);
    /// assert!((table.get(b'a') - 100.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn compute(words: &[Word]) -> Self {
        let mut table = [0.0; ALPHABET_SIZE];
        if words.is_empty() {
            return Self(table);
        }

        let mut counts = [0usize; ALPHABET_SIZE];
        for word in words {
            for &ch in word.chars() {
                counts[letter_index(ch)] += 1;
            }
        }

        let total_letters = (words.len() * WORD_LENGTH) as f64;
        for (slot, count) in table.iter_mut().zip(counts) {
            *slot = count as f64 / total_letters * 100.0;
        }

        Self(table)
    }

    /// Frequency of a letter (`b'a'..=b'z'`)
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> f64 {
        self.0[letter_index(letter)]
    }

    /// Raw table indexed by alphabet position
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }

    /// The `n` most frequent letters, highest first; ties break alphabetically
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(u8, f64)> {
        let mut letters: Vec<(u8, f64)> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &freq)| (letter_from_index(i), freq))
            .collect();
        // Stable sort keeps alphabetical order among equal frequencies
        letters.sort_by(|a, b| b.1.total_cmp(&a.1));
        letters.truncate(n);
        letters
    }
}

/// Per-position letter frequencies, as percentages of the word count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionalFrequencies {
    tables: [[f64; ALPHABET_SIZE]; WORD_LENGTH],
    word_count: usize,
}

impl PositionalFrequencies {
    /// Count each letter at each position independently
    ///
    /// With no words every position's table is empty (all lookups give 0).
    #[must_use]
    pub fn compute(words: &[Word]) -> Self {
        let mut tables = [[0.0; ALPHABET_SIZE]; WORD_LENGTH];
        if words.is_empty() {
            return Self {
                tables,
                word_count: 0,
            };
        }

        let mut counts = [[0usize; ALPHABET_SIZE]; WORD_LENGTH];
        for word in words {
            for (position, &ch) in word.chars().iter().enumerate() {
                counts[position][letter_index(ch)] += 1;
            }
        }

        // Every word has a letter at every position, so each column's total
        // is the number of words
        let total = words.len() as f64;
        for (table, column) in tables.iter_mut().zip(counts) {
            for (slot, count) in table.iter_mut().zip(column) {
                *slot = count as f64 / total * 100.0;
            }
        }

        Self {
            tables,
            word_count: words.len(),
        }
    }

    /// Frequency of `letter` at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize, letter: u8) -> f64 {
        self.tables[position][letter_index(letter)]
    }

    /// True when computed over an empty word set
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Letter and positional tables computed together over one word set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTables {
    pub letters: LetterFrequencies,
    pub positions: PositionalFrequencies,
}

impl FrequencyTables {
    #[must_use]
    pub fn compute(words: &[Word]) -> Self {
        Self {
            letters: LetterFrequencies::compute(words),
            positions: PositionalFrequencies::compute(words),
        }
    }
}
