//! Core domain types for Wordy
//!
//! The guess evaluator lives here. Everything in this module is pure: no I/O,
//! no shared state, safe to call from any thread.

mod evaluate;
mod letter;

pub use evaluate::{EvaluateError, evaluate_guess, is_solved};
pub use letter::LetterState;

/// Length of every answer and guess in the shipped word lists
pub const WORD_LENGTH: usize = 5;
