//! Scoring many guesses and picking the best ones
//!
//! Each guess is evaluated independently on the rayon pool; the candidate
//! pool is shared read-only and every task returns its own `(word, score)`.

use super::calculator::entropy;
use crate::core::Word;
use crate::error::EntropyError;
use rayon::prelude::*;
use tracing::info;

/// Score of one guess in a batch; failures are kept per word
pub type BatchScore = (String, Result<f64, EntropyError>);

/// Score every guess against `pool` in parallel
///
/// Output order equals input order. A guess that is not a valid word, or
/// that cannot be evaluated, fails alone without affecting the others.
///
/// # Examples
/// ```
/// use guess_entropy::core::Word;
/// use guess_entropy::solver::entropy::entropy_batch;
///
/// let pool: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let scores = entropy_batch(&["aaaaa", "aer0s", "aeros"], &pool);
/// assert_eq!(scores.len(), 3);
/// assert!(scores[1].1.is_err());
/// assert!(scores[2].1.as_ref().unwrap() > scores[0].1.as_ref().unwrap());
/// ```
#[must_use]
pub fn entropy_batch<S>(guesses: &[S], pool: &[Word]) -> Vec<BatchScore>
where
    S: AsRef<str> + Sync,
{
    entropy_batch_with(guesses, pool, |_| {})
}

/// Like [`entropy_batch`], calling `on_scored` once per finished guess
///
/// `on_scored` runs on worker threads in completion order.
pub fn entropy_batch_with<S, F>(guesses: &[S], pool: &[Word], on_scored: F) -> Vec<BatchScore>
where
    S: AsRef<str> + Sync,
    F: Fn(&BatchScore) + Sync,
{
    info!(
        guesses = guesses.len(),
        pool = pool.len(),
        "scoring guess batch"
    );

    guesses
        .par_iter()
        .map(|guess| {
            let text = guess.as_ref();
            let score = Word::new(text)
                .map_err(EntropyError::from)
                .and_then(|word| entropy(&word, pool));
            let scored = (text.to_string(), score);
            on_scored(&scored);
            scored
        })
        .collect()
}

/// Split a batch into successful scores and per-word failures, keeping order
#[must_use]
pub fn partition_results(
    batch: Vec<BatchScore>,
) -> (Vec<(String, f64)>, Vec<(String, EntropyError)>) {
    let mut scored = Vec::with_capacity(batch.len());
    let mut failed = Vec::new();

    for (word, score) in batch {
        match score {
            Ok(bits) => scored.push((word, bits)),
            Err(e) => failed.push((word, e)),
        }
    }

    (scored, failed)
}

/// Select the `k` highest scores
///
/// Sorted descending; equal scores keep their input order.
///
/// # Examples
/// ```
/// use guess_entropy::solver::entropy::top_k;
///
/// let scored = vec![("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 2.0)];
/// let best = top_k(&scored, 3);
/// assert_eq!(best, vec![("b", 3.0), ("d", 2.0), ("a", 1.0)]);
/// ```
#[must_use]
pub fn top_k<W: Clone>(scored: &[(W, f64)], k: usize) -> Vec<(W, f64)> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn batch_matches_single_evaluation() {
        let pool = words(&["slate", "irate", "crate", "grate", "trace"]);
        let guesses = ["crane", "aeros", "trace"];

        let batch = entropy_batch(&guesses, &pool);

        for ((word, score), guess) in batch.iter().zip(guesses) {
            assert_eq!(word, guess);
            let single = entropy(&Word::new(guess).unwrap(), &pool).unwrap();
            assert_eq!(score.as_ref().unwrap().to_bits(), single.to_bits());
        }
    }

    #[test]
    fn batch_isolates_failures() {
        let pool = words(&["slate", "irate"]);
        let guesses = vec![
            "crane".to_string(),
            "cr4ne".to_string(),
            "cranes".to_string(),
            String::new(),
            "slate".to_string(),
        ];

        let batch = entropy_batch(&guesses, &pool);

        assert_eq!(batch.len(), 5);
        assert!(batch[0].1.is_ok());
        assert!(matches!(batch[1].1, Err(EntropyError::InvalidWord(_))));
        assert!(matches!(
            batch[2].1,
            Err(EntropyError::LengthMismatch { .. })
        ));
        assert!(matches!(batch[3].1, Err(EntropyError::InvalidWord(_))));
        assert!(batch[4].1.is_ok());
    }

    #[test]
    fn batch_against_empty_pool_fails_each_word() {
        let batch = entropy_batch(&["crane", "slate"], &[]);
        assert!(batch.iter().all(|(_, s)| *s == Err(EntropyError::EmptyPool)));
    }

    #[test]
    fn batch_reports_every_word() {
        let pool = words(&["slate", "irate"]);
        let seen = AtomicUsize::new(0);

        let batch = entropy_batch_with(&["crane", "slate", "x1"], &pool, |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(batch.len(), 3);
        assert_eq!(seen.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn partition_keeps_order() {
        let batch = vec![
            ("one".to_string(), Ok(1.0)),
            ("bad".to_string(), Err(EntropyError::EmptyPool)),
            ("two".to_string(), Ok(2.0)),
        ];

        let (scored, failed) = partition_results(batch);

        assert_eq!(
            scored,
            vec![("one".to_string(), 1.0), ("two".to_string(), 2.0)]
        );
        assert_eq!(failed, vec![("bad".to_string(), EntropyError::EmptyPool)]);
    }

    #[test]
    fn top_k_descending_with_stable_ties() {
        let scored = vec![("a", 2.0), ("b", 5.0), ("c", 2.0), ("d", 5.0), ("e", 1.0)];

        let best = top_k(&scored, 4);

        assert_eq!(best, vec![("b", 5.0), ("d", 5.0), ("a", 2.0), ("c", 2.0)]);
    }

    #[test]
    fn top_k_larger_than_input() {
        let scored = vec![("a", 1.0), ("b", 3.0)];
        assert_eq!(top_k(&scored, 10), vec![("b", 3.0), ("a", 1.0)]);
        assert!(top_k(&scored, 0).is_empty());
    }

    #[test]
    fn top_k_picks_diverse_guess_over_repeated_letters() {
        let pool = words(&["slate", "irate", "crate", "grate"]);
        let batch = entropy_batch(&["aaaaa", "aeros"], &pool);
        let (scored, failed) = partition_results(batch);

        assert!(failed.is_empty());
        let best = top_k(&scored, 1);
        assert_eq!(best[0].0, "aeros");
    }
}
