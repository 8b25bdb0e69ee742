//! Answer selection
//!
//! Randomness sits behind [`AnswerPicker`] so sessions can be driven by a seeded
//! or fixed source in tests.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};

/// Chooses the answer for a new game
pub trait AnswerPicker: Send + Sync {
    /// Pick one word from `solutions`, or `None` if the list is empty
    fn pick(&self, solutions: &[String]) -> Option<String>;
}

/// Uniform choice using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl AnswerPicker for RandomPicker {
    fn pick(&self, solutions: &[String]) -> Option<String> {
        solutions.choose(&mut rand::rng()).cloned()
    }
}

/// Uniform choice from a seeded RNG, reproducible across runs
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AnswerPicker for SeededPicker {
    fn pick(&self, solutions: &[String]) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        solutions.choose(&mut *rng).cloned()
    }
}

/// Always answers with the same word, whatever the list holds
#[derive(Debug, Clone)]
pub struct FixedPicker(pub String);

impl FixedPicker {
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self(answer.into())
    }
}

impl AnswerPicker for FixedPicker {
    fn pick(&self, _solutions: &[String]) -> Option<String> {
        Some(self.0.clone())
    }
}
