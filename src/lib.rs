//! Guess Entropy
//!
//! Scores guesses in a Wordle-style word game by the information, in bits,
//! their feedback is expected to reveal about the hidden answer.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_entropy::core::Word;
//! use guess_entropy::solver::entropy::entropy;
//!
//! let pool: Vec<Word> = ["crane", "crate", "trace"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let guess = Word::new("crane").unwrap();
//! let bits = entropy(&guess, &pool).unwrap();
//! println!("{guess}: {bits:.3} bits");
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Evaluation algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;

pub use error::EntropyError;
