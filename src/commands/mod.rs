//! Player commands
//!
//! Each handler takes what a chat layer would pass along (user id, language,
//! raw input) and returns a [`Reply`] ready to display. Game errors become
//! friendly messages here; nothing in this module fails.

pub mod colorblind;
pub mod guess;
pub mod help;
pub mod line;
pub mod show;
pub mod stats;
pub mod surrender;

pub use colorblind::handle_colorblind;
pub use guess::handle_guess;
pub use help::handle_help;
pub use line::{Command, execute, parse_line};
pub use show::handle_show;
pub use stats::handle_stats;
pub use surrender::handle_surrender;

use crate::error::GameError;
use tracing::error;

/// How a reply should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
    Error,
}

/// Text sent back to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub title: Option<String>,
    pub text: String,
    pub tone: Tone,
}

impl Reply {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
            tone: Tone::Info,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
            tone: Tone::Error,
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl From<GameError> for Reply {
    fn from(err: GameError) -> Self {
        let text = match err {
            GameError::LengthMismatch { answer, .. } => {
                format!("Guess must be {answer} letters long")
            }
            GameError::AlreadyActive => "You already have a game in progress!".to_string(),
            GameError::NoActiveGame => "You haven't started a game yet!".to_string(),
            GameError::LanguageMismatch { .. } => {
                "You are already playing in a different language! Use `/surrender` to end it."
                    .to_string()
            }
            GameError::AlreadyGuessed { .. } => "You've already guessed that word!".to_string(),
            GameError::InvalidLetters { alphabet } => {
                format!("You can only use the following letters: `{alphabet}`")
            }
            GameError::UnknownWord { .. } => "That's not a valid word!".to_string(),
            GameError::UnsupportedLanguage { code } => {
                format!("Sorry, `{code}` is not a supported language")
            }
            GameError::EmptyWordList { code } => {
                format!("Sorry, there are no words loaded for `{code}` yet")
            }
            GameError::Store(err) => {
                error!(error = %err, "User database failure");
                "Sorry, we're unable to reach your game right now 😿".to_string()
            }
        };
        Self::error(text)
    }
}
