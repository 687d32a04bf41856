//! Rank command
//!
//! Scores a whole guess list against the pool and keeps the best guesses.

use crate::core::Word;
use crate::error::EntropyError;
use crate::solver::entropy::{entropy_batch_with, partition_results, top_k};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for ranking guesses
pub struct RankConfig {
    pub top: usize,
    pub show_progress: bool,
}

impl RankConfig {
    #[must_use]
    pub const fn new(top: usize) -> Self {
        Self {
            top,
            show_progress: true,
        }
    }
}

/// Result of a ranking run
pub struct RankResult {
    pub best: Vec<(String, f64)>,
    pub failed: Vec<(String, EntropyError)>,
    pub total_words: usize,
    pub pool_size: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Score every guess against `pool` and keep the top `config.top`
pub fn run_rank<S>(config: &RankConfig, guesses: &[S], pool: &[Word]) -> RankResult
where
    S: AsRef<str> + Sync,
{
    let pb = if config.show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let batch = entropy_batch_with(guesses, pool, |_| pb.inc(1));
    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_words = batch.len();
    let (scored, failed) = partition_results(batch);
    let best = top_k(&scored, config.top);

    info!(
        total_words,
        failed = failed.len(),
        elapsed_ms = duration.as_millis() as u64,
        "ranking finished"
    );

    RankResult {
        best,
        failed,
        total_words,
        pool_size: pool.len(),
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn quiet(top: usize) -> RankConfig {
        RankConfig {
            top,
            show_progress: false,
        }
    }

    #[test]
    fn rank_runs() {
        let pool = words_from_slice(&["slate", "irate", "crate", "grate", "trace"]);
        let guesses = ["crane", "aeros", "zzzzz", "trace"];

        let result = run_rank(&quiet(2), &guesses, &pool);

        assert_eq!(result.total_words, 4);
        assert_eq!(result.pool_size, 5);
        assert_eq!(result.best.len(), 2);
        assert!(result.failed.is_empty());
        assert!(result.best[0].1 >= result.best[1].1);
    }

    #[test]
    fn rank_reports_failed_words() {
        let pool = words_from_slice(&["slate", "irate"]);
        let guesses = ["crane", "cr@ne", "cranes"];

        let result = run_rank(&quiet(10), &guesses, &pool);

        assert_eq!(result.best.len(), 1);
        assert_eq!(result.failed.len(), 2);
        assert_eq!(result.failed[0].0, "cr@ne");
    }

    #[test]
    fn rank_empty_guess_list() {
        let pool = words_from_slice(&["slate"]);
        let guesses: [&str; 0] = [];

        let result = run_rank(&quiet(5), &guesses, &pool);

        assert_eq!(result.total_words, 0);
        assert!(result.best.is_empty());
    }
}
