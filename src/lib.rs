//! Wordy
//!
//! A Wordle-style word game engine: guess evaluation, per-user game sessions,
//! and the player commands built on them. Word lists, user storage and stats
//! reporting are injected.
//!
//! # Quick Start
//!
//! ```rust
//! use wordy::game::{EndResult, FixedPicker, SessionManager};
//! use wordy::store::MemoryStore;
//! use wordy::wordlists::Dictionary;
//!
//! let words = Dictionary::new().with_language("en", "abcdefghijklmnopqrstuvwxyz", ["crane"], ["slate"]);
//! let sessions = SessionManager::new(MemoryStore::new(), words).with_picker(FixedPicker::new("crane"));
//!
//! let outcome = sessions.submit_guess(7, "en", "slate").unwrap();
//! assert_eq!(outcome.state(), EndResult::Playing);
//! assert_eq!(sessions.surrender(7).unwrap(), "crane");
//! ```

// Guess evaluation
pub mod core;

// Game state and sessions
pub mod game;

// User records and persistence
pub mod store;

// Finished-game reporting
pub mod stats;

// Word lists and languages
pub mod wordlists;

// Feedback glyphs
pub mod render;

// Player commands
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::{GameError, StoreError};
