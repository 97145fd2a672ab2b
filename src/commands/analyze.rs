//! Word analysis command
//!
//! Breaks down the heuristic score of a word against the whole dictionary.

use crate::core::{Dictionary, Word};
use crate::game::GameError;
use crate::solver::{FrequencyTables, ScoreBreakdown, score_word};

/// Number of most frequent letters reported
const TOP_LETTERS: usize = 8;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub breakdown: ScoreBreakdown,
    pub score: f64,
    /// 1-based position among all dictionary words by score
    pub rank: usize,
    pub total_candidates: usize,
    /// Highest-scoring dictionary word and its score
    pub best: Option<(String, f64)>,
    /// Most frequent letters with their percentages
    pub top_letters: Vec<(char, f64)>,
}

/// Analyze the score of a word against every dictionary word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, GameError> {
    let word_obj = Word::new(word)?;
    if !dictionary.contains(&word_obj) {
        return Err(GameError::UnknownWord(word_obj.text().to_string()));
    }

    let tables = FrequencyTables::compute(dictionary.words());
    let breakdown = ScoreBreakdown::compute(&word_obj, &tables);
    let score = breakdown.total();

    let scores: Vec<(&Word, f64)> = dictionary
        .iter()
        .map(|w| (w, score_word(w, &tables)))
        .collect();
    let rank = 1 + scores.iter().filter(|(_, s)| *s > score).count();
    let best = scores
        .iter()
        .fold(None::<(&Word, f64)>, |best, &(w, s)| match best {
            Some((_, best_score)) if s <= best_score => best,
            _ => Some((w, s)),
        })
        .map(|(w, s)| (w.text().to_string(), s));

    let top_letters = tables
        .letters
        .top(TOP_LETTERS)
        .into_iter()
        .map(|(letter, pct)| (char::from(letter), pct))
        .collect();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        breakdown,
        score,
        rank,
        total_candidates: dictionary.len(),
        best,
        top_letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["crane", "slate", "irate", "mamma", "fuzzy"])
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("slate", &dictionary()).unwrap();

        assert_eq!(result.word, "slate");
        assert_eq!(result.breakdown.distinct_letters, 5);
        assert!((result.score - result.breakdown.total()).abs() < 1e-9);
        assert_eq!(result.total_candidates, 5);
        assert!(result.rank >= 1 && result.rank <= 5);
    }

    #[test]
    fn analyze_ranks_best_word_first() {
        let dictionary = dictionary();
        let (best, best_score) = analyze_word("fuzzy", &dictionary).unwrap().best.unwrap();

        let result = analyze_word(&best, &dictionary).unwrap();
        assert_eq!(result.rank, 1);
        assert!((result.score - best_score).abs() < 1e-9);
    }

    #[test]
    fn analyze_low_scoring_word_ranks_last() {
        // Only two distinct letters
        let result = analyze_word("mamma", &dictionary()).unwrap();
        assert_eq!(result.rank, 5);
    }

    #[test]
    fn analyze_reports_top_letters() {
        let result = analyze_word("crane", &dictionary()).unwrap();
        assert_eq!(result.top_letters.len(), 8);
        assert_eq!(result.top_letters[0].0, 'a');
    }

    #[test]
    fn analyze_invalid_word() {
        assert_eq!(
            analyze_word("zzzzz", &dictionary()).err(),
            Some(GameError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(
            analyze_word("cr4ne", &dictionary()).err(),
            Some(GameError::InvalidCharacters)
        );
    }
}
