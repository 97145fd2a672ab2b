//! Candidate filtering from guess feedback
//!
//! A guess/feedback pair is turned into positional rules plus per-letter count
//! bounds. Testing candidate letter counts against the bounds (instead of plain
//! membership checks) keeps repeated letters correct: an `Absent` on one copy
//! of a letter caps its count rather than banning it outright.

use crate::core::{
    ALPHABET_SIZE, Feedback, FeedbackSymbol, GuessRecord, WORD_LENGTH, Word, letter_index,
};

/// Constraints a candidate must satisfy to be consistent with one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackConstraint {
    /// Letter required at each position (from hits)
    required: [Option<u8>; WORD_LENGTH],
    /// Letter that may not sit at each position (from present/absent)
    forbidden: [Option<u8>; WORD_LENGTH],
    min_count: [u8; ALPHABET_SIZE],
    max_count: [u8; ALPHABET_SIZE],
}

impl FeedbackConstraint {
    /// Derive the constraints implied by `feedback` for `guess`
    #[must_use]
    pub fn new(guess: &Word, feedback: Feedback) -> Self {
        let mut required = [None; WORD_LENGTH];
        let mut forbidden = [None; WORD_LENGTH];
        let mut credited = [0u8; ALPHABET_SIZE];
        let mut capped = [false; ALPHABET_SIZE];

        for (position, (&letter, &symbol)) in
            guess.chars().iter().zip(feedback.symbols()).enumerate()
        {
            let index = letter_index(letter);
            match symbol {
                FeedbackSymbol::Hit => {
                    required[position] = Some(letter);
                    credited[index] += 1;
                }
                FeedbackSymbol::Present => {
                    forbidden[position] = Some(letter);
                    credited[index] += 1;
                }
                FeedbackSymbol::Absent => {
                    forbidden[position] = Some(letter);
                    capped[index] = true;
                }
            }
        }

        // An absent copy means the target holds exactly the credited copies
        let mut max_count = [WORD_LENGTH as u8; ALPHABET_SIZE];
        for (max, (&count, &is_capped)) in max_count.iter_mut().zip(credited.iter().zip(&capped)) {
            if is_capped {
                *max = count;
            }
        }

        Self {
            required,
            forbidden,
            min_count: credited,
            max_count,
        }
    }

    /// Check whether `word` could be the target given this feedback
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        for (position, &ch) in word.chars().iter().enumerate() {
            if let Some(letter) = self.required[position]
                && ch != letter
            {
                return false;
            }
            if self.forbidden[position] == Some(ch) {
                return false;
            }
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&count, (&min, &max))| count >= min && count <= max)
    }

    /// Minimum number of copies of `letter` a consistent word must contain
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    /// Maximum number of copies of `letter` a consistent word may contain
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> u8 {
        self.max_count[letter_index(letter)]
    }
}

/// Keep the words consistent with one guess/feedback pair
///
/// Returns a new collection in the original relative order; the input is not
/// modified. An empty result means the target is not among `words`.
///
/// # Examples
/// ```
/// use wordle_optimizer::core::{Feedback, Word};
/// use wordle_optimizer::solver::filter;
///
/// let words: Vec<Word> = ["crate", "slate", "erase"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("apple").unwrap();
/// let feedback = Feedback::evaluate(&guess, &words[2]);
///
/// // CRATE fits the same feedback; SLATE is out because of the L
/// let remaining = filter(&words, &guess, feedback);
/// assert_eq!(remaining, vec![words[0].clone(), words[2].clone()]);
/// ```
#[must_use]
pub fn filter(words: &[Word], guess: &Word, feedback: Feedback) -> Vec<Word> {
    let constraint = FeedbackConstraint::new(guess, feedback);
    words
        .iter()
        .filter(|word| constraint.allows(word))
        .cloned()
        .collect()
}

/// Keep the words consistent with every record in a guess history
#[must_use]
pub fn filter_history(words: &[Word], history: &[GuessRecord]) -> Vec<Word> {
    let constraints: Vec<FeedbackConstraint> = history
        .iter()
        .map(|record| FeedbackConstraint::new(record.word(), record.feedback()))
        .collect();

    words
        .iter()
        .filter(|word| constraints.iter().all(|c| c.allows(word)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackSymbol::{Absent, Hit, Present};

    const WORDS: &[&str] = &[
        "apple", "allee", "speed", "erase", "crate", "crane", "slate", "irate", "grate", "geese",
        "eerie", "llama", "level", "eager", "steel", "sleep", "hello", "robot", "floor", "mamma",
    ];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hit_requires_letter_in_place() {
        let remaining = filter(
            &words(&["crate", "slate", "crane"]),
            &word("xxxxe"),
            Feedback::new([Absent, Absent, Absent, Absent, Hit]),
        );
        assert_eq!(remaining, words(&["crate", "slate", "crane"]));

        let remaining = filter(
            &words(&["crate", "slate", "crane"]),
            &word("cxxxx"),
            Feedback::new([Hit, Absent, Absent, Absent, Absent]),
        );
        assert_eq!(remaining, words(&["crate", "crane"]));
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let remaining = filter(
            &words(&["crate", "actor", "tacit", "lemon"]),
            &word("txxxx"),
            Feedback::new([Present, Absent, Absent, Absent, Absent]),
        );
        // TACIT has T at position 0, LEMON has no T
        assert_eq!(remaining, words(&["crate", "actor"]));
    }

    #[test]
    fn absent_on_repeated_letter_caps_count() {
        // SPEED vs ERASE: one E present, one E present, so E >= 2 and unbounded
        let guess = word("speed");
        let feedback = Feedback::evaluate(&guess, &word("erase"));
        let constraint = FeedbackConstraint::new(&guess, feedback);
        assert_eq!(constraint.min_count(b'e'), 2);
        assert_eq!(constraint.max_count(b'e'), 5);
        assert_eq!(constraint.max_count(b'p'), 0);

        // ALLEE vs APPLE: one L credited, one absent, so exactly one L
        let guess = word("allee");
        let feedback = Feedback::evaluate(&guess, &word("apple"));
        let constraint = FeedbackConstraint::new(&guess, feedback);
        assert_eq!(constraint.min_count(b'l'), 1);
        assert_eq!(constraint.max_count(b'l'), 1);
        assert_eq!(constraint.min_count(b'e'), 1);
        assert_eq!(constraint.max_count(b'e'), 1);
    }

    #[test]
    fn absent_duplicate_does_not_ban_letter() {
        // The hit E is kept even though another E was marked absent
        let remaining = filter(
            &words(&["crate", "slate", "geese", "erase"]),
            &word("eeeee"),
            Feedback::new([Absent, Absent, Absent, Absent, Hit]),
        );
        assert_eq!(remaining, words(&["crate", "slate"]));
    }

    #[test]
    fn scenario_apple_against_erase() {
        let dictionary = words(&["apple", "allee", "speed", "erase", "crate"]);
        let guess = word("apple");
        let feedback = Feedback::evaluate(&guess, &word("erase"));
        assert_eq!(feedback.to_string(), "YBBBG");

        // CRATE also has a non-leading A, a final E and no P or L
        let remaining = filter(&dictionary, &guess, feedback);
        assert_eq!(remaining, words(&["erase", "crate"]));
    }

    #[test]
    fn filter_preserves_order_and_input() {
        let input = words(WORDS);
        let before = input.clone();
        let guess = word("crate");
        let feedback = Feedback::evaluate(&guess, &word("grate"));

        let remaining = filter(&input, &guess, feedback);
        assert_eq!(input, before);

        let positions: Vec<usize> = remaining
            .iter()
            .map(|w| input.iter().position(|i| i == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn filter_is_idempotent() {
        let input = words(WORDS);
        for guess in ["speed", "allee", "crate", "level"] {
            for target in ["erase", "apple", "steel", "eager"] {
                let guess = word(guess);
                let feedback = Feedback::evaluate(&guess, &word(target));
                let once = filter(&input, &guess, feedback);
                let twice = filter(&once, &guess, feedback);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn filter_is_sound_and_keeps_target() {
        let input = words(WORDS);
        for guess in &input {
            for target in &input {
                let feedback = Feedback::evaluate(guess, target);
                let remaining = filter(&input, guess, feedback);

                assert!(remaining.contains(target), "{guess} vs {target} dropped target");
                for candidate in &remaining {
                    assert_eq!(
                        Feedback::evaluate(guess, candidate),
                        feedback,
                        "{guess} vs {target} kept inconsistent {candidate}"
                    );
                }
            }
        }
    }

    #[test]
    fn filter_can_return_empty() {
        let remaining = filter(&words(&["crate", "slate"]), &word("zzzzz"), Feedback::ALL_HIT);
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_history_applies_every_record() {
        let input = words(WORDS);
        let target = word("steel");
        let history: Vec<GuessRecord> = ["crate", "sleep"]
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let guess = word(g);
                let feedback = Feedback::evaluate(&guess, &target);
                GuessRecord::new(guess, feedback, i + 1)
            })
            .collect();

        let remaining = filter_history(&input, &history);
        assert!(remaining.contains(&target));
        for candidate in &remaining {
            for record in &history {
                assert_eq!(Feedback::evaluate(record.word(), candidate), record.feedback());
            }
        }
    }
}
