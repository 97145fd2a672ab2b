//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::{AssistError, Assistant, parse_turn, run_assist, run_assist_with};
pub use benchmark::{BenchmarkResult, benchmark_progress_bar, run_benchmark, sample_targets};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveResult, solve_word};
