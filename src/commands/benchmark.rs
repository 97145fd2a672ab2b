//! Benchmark command
//!
//! Plays the solver against many targets in parallel and aggregates the
//! results.

use super::solve::solve_word;
use crate::core::{Dictionary, MAX_ATTEMPTS, Word};
use crate::solver::StrategyType;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from playing a single target
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average over solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Targets the solver did not find within the attempt limit
    pub failed_words: Vec<String>,
    pub first_guess_used: HashMap<String, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct random targets, or the whole dictionary if it is
/// smaller
#[must_use]
pub fn sample_targets<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    dictionary
        .words()
        .choose_multiple(rng, count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// Games are independent and run on the rayon thread pool; `progress` is
/// advanced once per finished game.
pub fn run_benchmark(
    dictionary: &Dictionary,
    strategy: &StrategyType,
    targets: &[Word],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    progress.set_length(targets.len() as u64);

    let results: Vec<WordTestResult> = targets
        .par_iter()
        .filter_map(|target| {
            let outcome = solve_word(target.text(), dictionary, strategy.clone()).ok();
            progress.inc(1);
            outcome
        })
        .map(|solved| WordTestResult {
            word: solved.target,
            guesses: solved.guesses.into_iter().map(|step| step.word).collect(),
            success: solved.success,
        })
        .collect();

    progress.finish_with_message("Complete!");
    summarize(&results, start.elapsed())
}

/// Progress bar styled for benchmark runs
#[must_use]
pub fn benchmark_progress_bar() -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    ProgressBar::new(0).with_style(style)
}

fn summarize(results: &[WordTestResult], duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<String, usize> = HashMap::new();
    let mut failed_words = Vec::new();

    for result in results {
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
        if result.success {
            *distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed_words.push(result.word.clone());
        }
    }

    let solved_counts: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();
    let solved = solved_counts.len();
    let average_guesses = if solved > 0 {
        solved_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let total_words = results.len();
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        total_words as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        distribution,
        failed_words,
        first_guess_used,
        duration,
        words_per_second,
    }
}

impl BenchmarkResult {
    /// Share of targets solved within `MAX_ATTEMPTS`, as a percentage
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }

    /// Guess counts in display order, including empty buckets
    #[must_use]
    pub fn distribution_rows(&self) -> Vec<(usize, usize)> {
        (1..=MAX_ATTEMPTS)
            .map(|guesses| (guesses, self.distribution.get(&guesses).copied().unwrap_or(0)))
            .collect()
    }
}
