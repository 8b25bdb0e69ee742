//! A single puzzle and its state machine

use crate::core::{EvaluateError, LetterState, evaluate_guess, is_solved};
use serde::{Deserialize, Serialize};

/// Status of a game
///
/// `Playing` is the only non-terminal state. A game leaves it at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndResult {
    Playing,
    Win,
    Lose,
    Surrender,
}

impl EndResult {
    /// True for `Win`, `Lose` and `Surrender`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// One puzzle for one player
///
/// `board_state` and `results` are index-aligned: entry `i` of `results` is the
/// feedback for guess `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveGame {
    language: String,
    answer: String,
    #[serde(default)]
    board_state: Vec<String>,
    #[serde(default)]
    results: Vec<Vec<LetterState>>,
    #[serde(default = "playing")]
    state: EndResult,
}

const fn playing() -> EndResult {
    EndResult::Playing
}

impl ActiveGame {
    /// Create a fresh game in the `Playing` state
    #[must_use]
    pub fn new(language: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            answer: answer.into(),
            board_state: Vec::new(),
            results: Vec::new(),
            state: EndResult::Playing,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Guesses in the order they were made
    #[must_use]
    pub fn board_state(&self) -> &[String] {
        &self.board_state
    }

    /// Feedback for each guess, aligned with [`ActiveGame::board_state`]
    #[must_use]
    pub fn results(&self) -> &[Vec<LetterState>] {
        &self.results
    }

    #[must_use]
    pub const fn state(&self) -> EndResult {
        self.state
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Number of letters in the answer
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.answer.chars().count()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.board_state.iter().any(|guess| guess == word)
    }

    /// Iterate over `(guess, feedback)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[LetterState])> {
        self.board_state
            .iter()
            .map(String::as_str)
            .zip(self.results.iter().map(Vec::as_slice))
    }

    /// Score `guess` and advance the game
    ///
    /// A terminal game is left untouched and its state returned as is. Otherwise
    /// the guess and its feedback are appended together; an all-correct result
    /// wins, and once the number of guesses exceeds the answer length the game
    /// is lost.
    ///
    /// # Errors
    /// Returns [`EvaluateError::LengthMismatch`] without modifying the game if
    /// the guess length differs from the answer.
    ///
    /// # Examples
    /// ```
    /// use wordy::game::{ActiveGame, EndResult};
    ///
    /// let mut game = ActiveGame::new("en", "abcd");
    /// assert_eq!(game.apply_guess("abcd").unwrap(), EndResult::Win);
    /// assert_eq!(game.board_state(), ["abcd"]);
    /// ```
    pub fn apply_guess(&mut self, guess: &str) -> Result<EndResult, EvaluateError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let result = evaluate_guess(guess, &self.answer)?;
        let solved = is_solved(&result);

        self.board_state.push(guess.to_string());
        self.results.push(result);

        if solved {
            self.state = EndResult::Win;
        } else if self.board_state.len() > self.word_length() {
            self.state = EndResult::Lose;
        }

        Ok(self.state)
    }

    /// Give up, returning the answer
    pub fn surrender(&mut self) -> &str {
        self.state = EndResult::Surrender;
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    #[test]
    fn new_game_is_playing_and_empty() {
        let game = ActiveGame::new("en", "crane");
        assert_eq!(game.state(), EndResult::Playing);
        assert!(game.board_state().is_empty());
        assert!(game.results().is_empty());
        assert_eq!(game.word_length(), 5);
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut game = ActiveGame::new("en", "abcd");
        assert_eq!(game.apply_guess("abcd").unwrap(), EndResult::Win);
        assert_eq!(game.board_state(), ["abcd"]);
        assert_eq!(game.results().len(), 1);
    }

    #[test]
    fn partial_guess_keeps_playing() {
        let mut game = ActiveGame::new("en", "abca");
        assert_eq!(game.apply_guess("aaab").unwrap(), EndResult::Playing);
        assert_eq!(game.results()[0], vec![Correct, Present, Absent, Present]);
    }

    #[test]
    fn loses_after_word_length_plus_one_misses() {
        let mut game = ActiveGame::new("en", "zzzzz");
        let misses = ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"];
        for miss in misses {
            assert_eq!(game.apply_guess(miss).unwrap(), EndResult::Playing);
        }
        assert_eq!(game.board_state().len(), 5);
        assert_eq!(game.apply_guess("fffff").unwrap(), EndResult::Lose);
        assert_eq!(game.board_state().len(), 6);
    }

    #[test]
    fn win_on_last_attempt_beats_loss() {
        let mut game = ActiveGame::new("en", "ab");
        game.apply_guess("cc").unwrap();
        game.apply_guess("dd").unwrap();
        assert_eq!(game.apply_guess("ab").unwrap(), EndResult::Win);
    }

    #[test]
    fn terminal_game_ignores_guesses() {
        let mut game = ActiveGame::new("en", "abcd");
        game.apply_guess("abcd").unwrap();
        let before = game.clone();

        assert_eq!(game.apply_guess("dcba").unwrap(), EndResult::Win);
        // Wrong length is not even checked once the game is over
        assert_eq!(game.apply_guess("toolong").unwrap(), EndResult::Win);
        assert_eq!(game, before);
    }

    #[test]
    fn length_mismatch_leaves_game_unchanged() {
        let mut game = ActiveGame::new("en", "abcd");
        assert!(game.apply_guess("abc").is_err());
        assert!(game.board_state().is_empty());
        assert!(game.results().is_empty());
        assert_eq!(game.state(), EndResult::Playing);
    }

    #[test]
    fn board_and_results_stay_aligned() {
        let mut game = ActiveGame::new("en", "zzzz");
        for guess in ["abcd", "zz", "azbz", "zzzq", "abcd", "zzzz", "qqqq"] {
            let _ = game.apply_guess(guess);
            assert_eq!(game.board_state().len(), game.results().len());
        }
    }

    #[test]
    fn surrender_reveals_answer() {
        let mut game = ActiveGame::new("en", "crane");
        assert_eq!(game.surrender(), "crane");
        assert_eq!(game.state(), EndResult::Surrender);
        assert_eq!(game.apply_guess("crane").unwrap(), EndResult::Surrender);
    }

    #[test]
    fn rows_pair_guesses_with_feedback() {
        let mut game = ActiveGame::new("en", "ab");
        game.apply_guess("ba").unwrap();
        let rows: Vec<_> = game.rows().collect();
        assert_eq!(rows, vec![("ba", &[Present, Present][..])]);
    }

    #[test]
    fn serde_uses_lowercase_states() {
        let mut game = ActiveGame::new("en", "ab");
        game.apply_guess("ab").unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["state"], "win");
        assert_eq!(json["results"][0][0], "correct");

        let back: ActiveGame = serde_json::from_value(json).unwrap();
        assert_eq!(back, game);
    }
}
