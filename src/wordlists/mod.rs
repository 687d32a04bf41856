//! Word lists
//!
//! Loading candidate pools and guess lists from plain text files.

pub mod loader;

pub use loader::{load_from_file, load_lines, words_from_slice};
