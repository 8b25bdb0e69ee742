//! Game sessions
//!
//! [`ActiveGame`] is one puzzle for one player. [`SessionManager`] owns the
//! lifecycle: starting games, applying guesses, recording results.

mod active;
pub mod picker;
mod session;

pub use active::{ActiveGame, EndResult};
pub use picker::{AnswerPicker, FixedPicker, RandomPicker, SeededPicker};
pub use session::{GuessOutcome, SessionManager, UserId};
