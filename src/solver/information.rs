//! Self-information of an observed pattern

use crate::error::EntropyError;

/// Bits of information carried by an outcome of probability `p`
///
/// Returns `log2(1/p)`, or exactly `0.0` for `p == 0` since a pattern no
/// candidate can produce is never observed.
///
/// # Errors
/// Returns `InvalidProbability` if `p` is NaN or outside [0, 1].
///
/// # Examples
/// ```
/// use guess_entropy::solver::information;
///
/// assert_eq!(information(0.0).unwrap(), 0.0);
/// assert_eq!(information(1.0).unwrap(), 0.0);
/// assert!((information(0.25).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn information(p: f64) -> Result<f64, EntropyError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(EntropyError::InvalidProbability(p));
    }
    if p <= 0.0 {
        return Ok(0.0);
    }
    Ok((1.0 / p).log2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_probability_is_zero_bits() {
        let bits = information(0.0).unwrap();
        assert!(bits.is_finite());
        assert!(bits.abs() < f64::EPSILON);
    }

    #[test]
    fn certain_outcome_is_zero_bits() {
        assert!(information(1.0).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn halving_is_one_bit() {
        assert!((information(0.5).unwrap() - 1.0).abs() < 1e-12);
        assert!((information(0.125).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rarer_outcomes_carry_more_bits() {
        assert!(information(0.01).unwrap() > information(0.1).unwrap());
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert_eq!(
            information(-0.1),
            Err(EntropyError::InvalidProbability(-0.1))
        );
        assert_eq!(information(1.5), Err(EntropyError::InvalidProbability(1.5)));
        assert!(matches!(
            information(f64::NAN),
            Err(EntropyError::InvalidProbability(_))
        ));
    }
}
