//! Guess Entropy - CLI
//!
//! Scores guesses by expected information gain against a pool of possible answers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_entropy::{
    commands::{RankConfig, analyze_word, run_feedback, run_filter, run_rank},
    core::Word,
    logging,
    output::{print_analysis_result, print_feedback_result, print_filter_result, print_rank_result},
    wordlists::{load_from_file, load_lines},
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "guess_entropy",
    about = "Score word-game guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File of possible answers, one per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File of guesses to rank (defaults to the answer list)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<PathBuf>,

    /// Word length; answers of any other length are skipped
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Worker threads for batch scoring (defaults to one per core)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the entropy of a single guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Score every guess and show the best ones
    Rank {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show the constraint a feedback pattern compiles to and the answers it keeps
    Filter {
        /// The guessed word
        guess: String,

        /// Feedback such as "-Y-GY" or "⬜🟨⬜🟩🟨"
        pattern: String,
    },

    /// Show the feedback a guess receives against a known answer
    Feedback {
        /// The guessed word
        guess: String,

        /// The hidden answer
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    match &cli.command {
        Commands::Analyze { word } => run_analyze_command(&cli, word),
        Commands::Rank { top, no_progress } => run_rank_command(&cli, *top, *no_progress),
        Commands::Filter { guess, pattern } => run_filter_command(&cli, guess, pattern),
        Commands::Feedback { guess, answer } => {
            let result = run_feedback(guess, answer)?;
            print_feedback_result(&result);
            Ok(())
        }
    }
}

/// Load the answer pool named by `--wordlist`
fn load_pool(cli: &Cli) -> Result<Vec<Word>> {
    let path = cli
        .wordlist
        .as_deref()
        .context("this command needs an answer list: pass --wordlist <FILE>")?;
    let pool = load_pool_from(path, cli.length)?;
    info!(path = %path.display(), answers = pool.len(), "loaded answer pool");
    Ok(pool)
}

fn load_pool_from(path: &Path, length: usize) -> Result<Vec<Word>> {
    load_from_file(path, Some(length))
        .with_context(|| format!("failed to read word list {}", path.display()))
}

fn run_analyze_command(cli: &Cli, word: &str) -> Result<()> {
    let pool = load_pool(cli)?;
    let result = analyze_word(word, &pool)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_rank_command(cli: &Cli, top: usize, no_progress: bool) -> Result<()> {
    let pool = load_pool(cli)?;

    let guesses: Vec<String> = match cli.guesses.as_deref() {
        Some(path) => load_lines(path)
            .with_context(|| format!("failed to read guess list {}", path.display()))?,
        None => pool.iter().map(|w| w.text().to_string()).collect(),
    };

    let config = RankConfig {
        show_progress: !no_progress,
        ..RankConfig::new(top)
    };
    let result = run_rank(&config, &guesses, &pool);
    print_rank_result(&result);
    Ok(())
}

fn run_filter_command(cli: &Cli, guess: &str, pattern: &str) -> Result<()> {
    let pool = load_pool(cli)?;
    let result = run_filter(guess, pattern, &pool)?;
    print_filter_result(&result);
    Ok(())
}
