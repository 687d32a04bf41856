//! Entropy evaluation
//!
//! Scores a guess by the information its feedback is expected to reveal,
//! singly or in parallel batches, and ranks the results.

mod calculator;
mod selector;

pub use calculator::{EntropyReport, entropy, evaluate};
pub use selector::{BatchScore, entropy_batch, entropy_batch_with, partition_results, top_k};
