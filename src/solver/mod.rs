//! Guess evaluation
//!
//! Pattern compilation, pool filtering and information scoring, converging
//! in the entropy evaluator.

mod constraint;
pub mod entropy;
mod filter;
mod information;

pub use constraint::{Constraint, LetterSet, PositionRule};
pub use filter::{FilterOutcome, count_matches, filter_pool};
pub use information::information;
