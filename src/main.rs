//! Wordle Optimizer - CLI
//!
//! Wordle helper with TUI and CLI modes: tracks the words consistent with
//! every guess so far and recommends the next one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_optimizer::{
    commands::{
        analyze_word, benchmark_progress_bar, run_assist, run_benchmark, run_simple,
        sample_targets, solve_word,
    },
    core::{Dictionary, Word},
    game::{DailyWordSource, EnvDailyWord, FileDailyWord, GameMode, SystemTargets},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_OPENERS, DEFAULT_SEARCH_LIMIT, ScorerConfig, StrategyType},
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_optimizer",
    about = "Wordle helper that narrows candidates and recommends the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: heuristic (default), random
    #[arg(short, long, global = true, default_value = "heuristic")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of candidates scored per turn
    #[arg(long, global = true, default_value_t = DEFAULT_SEARCH_LIMIT)]
    search_limit: usize,

    /// Preferred first guesses, comma separated, tried in order
    #[arg(long, global = true, value_delimiter = ',')]
    openers: Option<Vec<String>>,

    /// File holding today's word (otherwise $WORDLE_DAILY_WORD is used)
    #[arg(long, global = true)]
    daily_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Game mode: random, daily or manual
        #[arg(short, long, default_value = "random")]
        mode: GameMode,
    },

    /// Suggest guesses for a game played elsewhere, from entered feedback
    Assist,

    /// Let the solver play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Break down the heuristic score of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to test (all by default)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Pick the words at random instead of from the top of the list
        #[arg(short, long)]
        random: bool,

        /// Seed for --random
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Log output would corrupt the full-screen UI
    let default_filter = if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let dictionary = load_dictionary(&cli.wordlist)
        .with_context(|| format!("Failed to load word list '{}'", cli.wordlist))?;
    anyhow::ensure!(!dictionary.is_empty(), "Word list '{}' has no valid words", cli.wordlist);

    let strategy = build_strategy(&cli)?;

    match command {
        Commands::Play => run_play_command(&dictionary, strategy, daily_source(&cli)),
        Commands::Simple { mode } => {
            let mut targets = SystemTargets::new(daily_source(&cli));
            run_simple(&dictionary, strategy, mode, &mut targets)?;
            Ok(())
        }
        Commands::Assist => {
            run_assist(&dictionary, strategy)?;
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &dictionary, strategy)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            random,
            seed,
        } => {
            run_benchmark_command(&dictionary, &strategy, count, random, seed);
            Ok(())
        }
    }
}

fn build_strategy(cli: &Cli) -> Result<StrategyType> {
    let openers = match &cli.openers {
        Some(words) => words
            .iter()
            .map(|w| Word::new(w.trim()).with_context(|| format!("Invalid opener '{w}'")))
            .collect::<Result<Vec<_>>>()?,
        None => DEFAULT_OPENERS
            .iter()
            .map(|w| Word::new(w))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let config = ScorerConfig::new(cli.search_limit, openers);
    Ok(StrategyType::from_name(&cli.strategy, config))
}

fn daily_source(cli: &Cli) -> Box<dyn DailyWordSource> {
    match &cli.daily_file {
        Some(path) => Box::new(FileDailyWord::new(path)),
        None => Box::new(EnvDailyWord::default()),
    }
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    strategy: &StrategyType,
    count: Option<usize>,
    random: bool,
    seed: Option<u64>,
) {
    let count = count.unwrap_or(dictionary.len()).min(dictionary.len());

    let targets: Vec<Word> = if random {
        let mut rng =
            seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        sample_targets(dictionary, count, &mut rng)
    } else {
        dictionary.words().iter().take(count).cloned().collect()
    };

    println!(
        "Running {} benchmark on {} words...",
        strategy.name(),
        targets.len()
    );

    let progress = benchmark_progress_bar();
    let result = run_benchmark(dictionary, strategy, &targets, &progress);
    print_benchmark_result(&result);
}

fn run_play_command(
    dictionary: &Dictionary,
    strategy: StrategyType,
    daily: Box<dyn DailyWordSource>,
) -> Result<()> {
    use wordle_optimizer::interactive::{App, run_tui};

    let app = App::new(dictionary, strategy, Box::new(SystemTargets::new(daily)));
    run_tui(app)
}
