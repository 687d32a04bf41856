//! Expected information of a guess against a candidate pool
//!
//! Every feedback pattern for the guess length is compiled into a constraint
//! and matched against the pool. Each pattern contributes `p × log₂(1/p)`,
//! where `p` is the fraction of the pool it matches.

use crate::core::{PatternSpace, Word};
use crate::error::EntropyError;
use crate::solver::{Constraint, count_matches, information};
use tracing::debug;

/// Full breakdown of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    /// Expected information gain in bits
    pub entropy: f64,
    /// Σ p × matched over all patterns
    pub expected_remaining: f64,
    /// Largest number of pool words any single pattern matches
    pub max_matches: usize,
    /// Patterns matching at least one pool word
    pub informative_patterns: usize,
    /// Size of the pattern space that was walked
    pub patterns: usize,
    /// Size of the pool
    pub pool_size: usize,
}

/// Calculate the expected information gain of `guess` in bits
///
/// # Errors
/// - `EmptyPool` if `pool` is empty
/// - `LengthMismatch` if a pool word's length differs from the guess
///
/// # Examples
/// ```
/// use guess_entropy::core::Word;
/// use guess_entropy::solver::entropy::entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let pool: Vec<Word> = ["crane", "crate", "trace"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let bits = entropy(&guess, &pool).unwrap();
/// assert!(bits > 0.0);
/// ```
pub fn entropy(guess: &Word, pool: &[Word]) -> Result<f64, EntropyError> {
    evaluate(guess, pool).map(|report| report.entropy)
}

/// Evaluate `guess` and return the full [`EntropyReport`]
///
/// # Errors
/// Same as [`entropy`].
pub fn evaluate(guess: &Word, pool: &[Word]) -> Result<EntropyReport, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }
    if let Some(word) = pool.iter().find(|word| word.len() != guess.len()) {
        return Err(EntropyError::LengthMismatch {
            expected: guess.len(),
            found: word.len(),
        });
    }

    let space = PatternSpace::new(guess.len())?;

    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;
    let mut max_matches = 0;
    let mut informative_patterns = 0;

    for pattern in &space {
        let constraint = Constraint::compile(guess, &pattern)?;
        let outcome = count_matches(&constraint, pool)?;
        if outcome.matched == 0 {
            continue;
        }

        let p = outcome.probability();
        entropy += p * information(p)?;
        expected_remaining += p * outcome.matched as f64;
        max_matches = max_matches.max(outcome.matched);
        informative_patterns += 1;
    }

    debug!(
        guess = %guess,
        pool = pool.len(),
        entropy,
        informative_patterns,
        "evaluated guess"
    );

    Ok(EntropyReport {
        entropy,
        expected_remaining,
        max_matches,
        informative_patterns,
        patterns: space.size(),
        pool_size: pool.len(),
    })
}
