//! Filter command
//!
//! Shows the constraint one feedback pattern compiles to and the pool words
//! that still satisfy it.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{Constraint, count_matches, filter_pool, information};
use anyhow::{Context, Result};

/// Result of filtering the pool by one pattern
pub struct FilterResult {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    pub constraint: Constraint,
    pub matches: Vec<Word>,
    pub pool_size: usize,
    pub probability: f64,
    pub bits: f64,
}

/// Compile `guess` and `pattern` and filter `pool` with the result
///
/// # Errors
///
/// Returns an error if the guess or pattern cannot be parsed, their lengths
/// differ, or the pool is empty.
pub fn run_filter(guess: &str, pattern: &str, pool: &[Word]) -> Result<FilterResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let pattern: FeedbackPattern = pattern.parse().map_err(anyhow::Error::msg)?;

    let constraint = Constraint::compile(&guess, &pattern)?;
    let matches = filter_pool(&constraint, pool)?.into_iter().cloned().collect();
    let outcome = count_matches(&constraint, pool)?;
    let probability = outcome.probability();
    let bits = information(probability)?;

    Ok(FilterResult {
        guess,
        pattern,
        constraint,
        matches,
        pool_size: outcome.pool_size,
        probability,
        bits,
    })
}
