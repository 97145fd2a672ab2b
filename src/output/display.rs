//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, frequency_bar, guess_tiles};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{MAX_ATTEMPTS, Word};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let tiles = Word::new(&step.word)
            .map(|word| guess_tiles(&word, step.feedback))
            .unwrap_or_else(|_| step.word.to_uppercase());
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            tiles,
            feedback_to_emoji(step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.1}", step.score);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            "❌ No remaining possibilities: the target is not in the word list"
                .red()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {MAX_ATTEMPTS} guesses")
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let breakdown = &result.breakdown;
    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!(
        "   Distinct letters:  {} → {:.1}",
        breakdown.distinct_letters,
        breakdown.distinct_bonus()
    );
    println!("   Letter frequency:  {:.1}", breakdown.letter_score);
    println!(
        "   Positional:        {:.1} × 2 → {:.1}",
        breakdown.positional_score,
        breakdown.weighted_positional()
    );
    println!(
        "   Total score:       {}",
        format!("{:.1}", result.score).bright_yellow().bold()
    );
    println!(
        "   Rank:              {} of {}",
        result.rank.to_string().bright_green(),
        result.total_candidates
    );

    if let Some((best, best_score)) = &result.best {
        println!(
            "   Best word:         {} ({best_score:.1})",
            best.to_uppercase().bright_cyan()
        );
    }

    if let Some(&(_, top)) = result.top_letters.first() {
        println!("\n🔤 {}", "Most common letters:".bright_cyan().bold());
        for (letter, pct) in &result.top_letters {
            println!(
                "   {}: {} {pct:4.1}%",
                letter.to_ascii_uppercase(),
                frequency_bar(*pct, top, 20).green()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", result.success_rate()).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (guess_count, count) in result.distribution_rows() {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    let mut first_guesses: Vec<(&String, &usize)> = result.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if !first_guesses.is_empty() {
        println!("\n🎯 {}", "First guess usage:".bright_cyan().bold());
        for (word, count) in first_guesses.iter().take(5) {
            println!("   {}: {count} times", word.to_uppercase());
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n😰 {}", "Unsolved words:".yellow().bold());
        for word in result.failed_words.iter().take(10) {
            println!("   {}", word.to_uppercase().yellow());
        }
    }
}
