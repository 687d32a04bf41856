//! Applying a compiled constraint to a candidate pool

use super::Constraint;
use crate::core::Word;
use crate::error::EntropyError;

/// Result of counting matches for one constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Pool words satisfying the constraint
    pub matched: usize,
    /// Size of the pool that was scanned
    pub pool_size: usize,
}

impl FilterOutcome {
    /// Fraction of the pool that matched, always in [0, 1]
    #[inline]
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.matched as f64 / self.pool_size as f64
    }
}

/// Return the pool words satisfying `constraint`, in pool order
///
/// # Errors
/// Returns `EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use guess_entropy::core::Word;
/// use guess_entropy::solver::{Constraint, filter_pool};
///
/// let guess = Word::new("crane").unwrap();
/// let constraint = Constraint::compile(&guess, &"GG---".parse().unwrap()).unwrap();
/// let pool: Vec<Word> = ["crust", "crane", "crypt"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let matches = filter_pool(&constraint, &pool).unwrap();
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].text(), "CRUST");
/// ```
pub fn filter_pool<'a>(
    constraint: &Constraint,
    pool: &'a [Word],
) -> Result<Vec<&'a Word>, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    Ok(pool.iter().filter(|word| constraint.matches(word)).collect())
}

/// Count the pool words satisfying `constraint`
///
/// # Errors
/// Returns `EmptyPool` if `pool` is empty.
pub fn count_matches(constraint: &Constraint, pool: &[Word]) -> Result<FilterOutcome, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    let matched = pool.iter().filter(|word| constraint.matches(word)).count();

    Ok(FilterOutcome {
        matched,
        pool_size: pool.len(),
    })
}
