//! The dictionary of valid guesses and targets
//!
//! An ordered, deduplicated, immutable collection of words with fast
//! membership lookup.

use super::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Ordered, deduplicated word universe
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// Each line is trimmed and lowercased; only lines of exactly five letters
    /// a-z are kept. Malformed lines are dropped silently, and repeated words
    /// keep their first position.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimizer::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["Crane", " slate ", "toolong", "crane", "ab1de"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains_str("crane"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        let mut dropped = 0usize;

        for line in lines {
            match Word::new(line.as_ref().trim()) {
                Ok(word) => dictionary.push(word),
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!("Dropped {dropped} malformed dictionary lines");
        }

        dictionary
    }

    /// Build a dictionary from already validated words, dropping duplicates
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.push(word);
        }
        dictionary
    }

    fn push(&mut self, word: Word) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Check if a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Check a raw string, normalized the same way as dictionary lines
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text.trim()).is_ok_and(|word| self.contains(&word))
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_normalizes_and_filters() {
        let dictionary = Dictionary::from_lines([
            "  APPLE ", "speed\r", "", "abc", "toolong", "cr4te", "erase", "don't",
        ]);
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "speed", "erase"]);
    }

    #[test]
    fn from_lines_deduplicates_keeping_first_order() {
        let dictionary = Dictionary::from_lines(["crate", "slate", "CRATE", "irate", "slate"]);
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["crate", "slate", "irate"]);
    }

    #[test]
    fn contains_checks_membership() {
        let dictionary = Dictionary::from_lines(["crate", "slate"]);
        assert!(dictionary.contains(&Word::new("crate").unwrap()));
        assert!(dictionary.contains_str("SLATE"));
        assert!(!dictionary.contains_str("irate"));
        assert!(!dictionary.contains_str("nope"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_lines(Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }
}
