//! Error types for game sessions and storage

use crate::core::EvaluateError;
use derive_more::{Display, Error, From};

/// Failure reading or writing user records
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("user database I/O failed: {_0}")]
    Io(std::io::Error),
    #[display("user database is not valid JSON: {_0}")]
    Json(serde_json::Error),
}

/// Recoverable conditions reported back to whoever issued a game command
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    #[display("guess has {guess} letters but the answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },
    #[display("a game is already in progress")]
    AlreadyActive,
    #[display("no game in progress")]
    NoActiveGame,
    #[display("already playing a game in '{active}'")]
    LanguageMismatch { active: String },
    #[display("'{word}' was already guessed")]
    AlreadyGuessed { word: String },
    #[display("guess may only use the letters '{alphabet}'")]
    InvalidLetters { alphabet: String },
    #[display("'{word}' is not in the word list")]
    UnknownWord { word: String },
    #[display("language '{code}' is not supported")]
    UnsupportedLanguage { code: String },
    #[display("no solution words loaded for '{code}'")]
    EmptyWordList { code: String },
    #[from]
    #[display("{_0}")]
    Store(StoreError),
}

impl From<EvaluateError> for GameError {
    fn from(err: EvaluateError) -> Self {
        match err {
            EvaluateError::LengthMismatch { guess, answer } => {
                Self::LengthMismatch { guess, answer }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_error_converts() {
        let err: GameError = EvaluateError::LengthMismatch {
            guess: 4,
            answer: 5,
        }
        .into();
        assert!(matches!(
            err,
            GameError::LengthMismatch {
                guess: 4,
                answer: 5
            }
        ));
    }

    #[test]
    fn store_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: GameError = StoreError::from(io).into();
        assert!(matches!(err, GameError::Store(StoreError::Io(_))));
        assert!(err.to_string().contains("nope"));
    }
}
