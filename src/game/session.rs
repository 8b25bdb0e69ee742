//! Per-user game sessions
//!
//! [`SessionManager`] loads a user's record, applies one operation, and saves
//! the record back, all under that user's lock so concurrent requests for the
//! same user cannot interleave.

use super::picker::{AnswerPicker, RandomPicker};
use super::{ActiveGame, EndResult};
use crate::core::WORD_LENGTH;
use crate::error::GameError;
use crate::stats::{NoopReporter, StatsReporter};
use crate::store::{SessionStore, UserRecord, UserStats};
use crate::wordlists::WordSource;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Identifies a player
pub type UserId = u64;

/// What happened after a guess was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The game after the guess, detached from the user if it has ended
    pub game: ActiveGame,
    /// True if this guess started a new game
    pub started: bool,
    /// The user's palette preference, for rendering
    pub colorblind: bool,
}

impl GuessOutcome {
    #[must_use]
    pub const fn state(&self) -> EndResult {
        self.game.state()
    }
}

/// Owns the game lifecycle for every user
///
/// Word lists and storage are injected; answer selection and stats reporting
/// default to [`RandomPicker`] and [`NoopReporter`].
pub struct SessionManager<S, W> {
    store: S,
    words: W,
    picker: Box<dyn AnswerPicker>,
    reporter: Box<dyn StatsReporter>,
    word_length: usize,
    locks: Mutex<FxHashMap<UserId, Arc<Mutex<()>>>>,
}

impl<S: SessionStore, W: WordSource> SessionManager<S, W> {
    /// Create a manager over `store` and `words`
    #[must_use]
    pub fn new(store: S, words: W) -> Self {
        Self {
            store,
            words,
            picker: Box::new(RandomPicker),
            reporter: Box::new(NoopReporter),
            word_length: WORD_LENGTH,
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Replace the answer picker
    #[must_use]
    pub fn with_picker(mut self, picker: impl AnswerPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Replace the stats reporter
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl StatsReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Set the guess length [`SessionManager::submit_guess`] accepts
    #[must_use]
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn words(&self) -> &W {
        &self.words
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Start a new game for `user` in `language`
    ///
    /// A finished game still attached to the user is replaced.
    ///
    /// # Errors
    /// - [`GameError::AlreadyActive`] if the user has a game in progress
    /// - [`GameError::UnsupportedLanguage`] or [`GameError::EmptyWordList`] if
    ///   no answer can be drawn
    /// - [`GameError::Store`] if the record cannot be read or written
    #[instrument(skip(self))]
    pub fn start_game(&self, user: UserId, language: &str) -> Result<ActiveGame, GameError> {
        self.locked(user, || {
            let mut record = self.store.load(user)?;
            if record.playing_game().is_some() {
                return Err(GameError::AlreadyActive);
            }

            let game = self.new_game(language)?;
            record.current_game = Some(game.clone());
            self.store.save(user, &record)?;
            Ok(game)
        })
    }

    /// Apply `guess` to the user's current game as is
    ///
    /// No dictionary or alphabet checks are made; see
    /// [`SessionManager::submit_guess`] for the full command flow. A finished
    /// game is recorded in the user's stats and detached.
    ///
    /// # Errors
    /// - [`GameError::NoActiveGame`] if the user has no game attached
    /// - [`GameError::LengthMismatch`] if the guess does not fit the answer
    /// - [`GameError::Store`] if the record cannot be read or written
    #[instrument(skip(self))]
    pub fn apply_guess(&self, user: UserId, guess: &str) -> Result<EndResult, GameError> {
        self.locked(user, || {
            let mut record = self.store.load(user)?;
            let game = record
                .current_game
                .as_mut()
                .ok_or(GameError::NoActiveGame)?;

            let was_playing = game.is_playing();
            let state = game.apply_guess(guess)?;
            if was_playing {
                let finished = Self::settle(user, &mut record);
                self.store.save(user, &record)?;
                self.report(user, finished.as_ref());
            }
            Ok(state)
        })
    }

    /// Handle a guess typed by a player
    ///
    /// The guess is lowercased, then checked in this order: length, word
    /// list, alphabet. If the user has no game in progress a new one is
    /// started in `language`. The guess must match the running game's
    /// language and must not repeat an earlier guess. Nothing is changed when
    /// a check fails.
    ///
    /// # Errors
    /// - [`GameError::LengthMismatch`] if the guess is not the configured length
    /// - [`GameError::UnknownWord`] if the word list does not accept it
    /// - [`GameError::InvalidLetters`] if it uses letters outside the alphabet
    /// - [`GameError::LanguageMismatch`] if a game in another language is running
    /// - [`GameError::AlreadyGuessed`] if the word was guessed before in this game
    /// - [`GameError::UnsupportedLanguage`], [`GameError::EmptyWordList`] or
    ///   [`GameError::Store`] from starting or saving the game
    #[instrument(skip(self))]
    pub fn submit_guess(
        &self,
        user: UserId,
        language: &str,
        guess: &str,
    ) -> Result<GuessOutcome, GameError> {
        let guess = guess.trim().to_lowercase();
        self.validate_word(language, &guess)?;

        self.locked(user, || {
            let mut record = self.store.load(user)?;
            let started = record.playing_game().is_none();
            if started {
                record.current_game = Some(self.new_game(language)?);
            }
            let Some(game) = record.current_game.as_mut() else {
                return Err(GameError::NoActiveGame);
            };

            if game.language() != language {
                return Err(GameError::LanguageMismatch {
                    active: game.language().to_string(),
                });
            }
            if game.has_guessed(&guess) {
                return Err(GameError::AlreadyGuessed { word: guess });
            }

            let state = game.apply_guess(&guess)?;
            debug!(?state, guesses = game.board_state().len(), "Guess applied");
            let snapshot = game.clone();

            let finished = Self::settle(user, &mut record);
            self.store.save(user, &record)?;
            self.report(user, finished.as_ref());

            Ok(GuessOutcome {
                game: snapshot,
                started,
                colorblind: record.colorblind,
            })
        })
    }

    /// Give up the current game, returning its answer
    ///
    /// # Errors
    /// - [`GameError::NoActiveGame`] if the user has no game in progress
    /// - [`GameError::Store`] if the record cannot be read or written
    #[instrument(skip(self))]
    pub fn surrender(&self, user: UserId) -> Result<String, GameError> {
        self.locked(user, || {
            let mut record = self.store.load(user)?;
            if record.playing_game().is_none() {
                return Err(GameError::NoActiveGame);
            }
            let Some(game) = record.current_game.as_mut() else {
                return Err(GameError::NoActiveGame);
            };

            let answer = game.surrender().to_string();
            let finished = Self::settle(user, &mut record);
            self.store.save(user, &record)?;
            self.report(user, finished.as_ref());
            Ok(answer)
        })
    }

    /// The user's game in progress
    ///
    /// # Errors
    /// - [`GameError::NoActiveGame`] if there is none
    /// - [`GameError::Store`] if the record cannot be read
    pub fn current_game(&self, user: UserId) -> Result<ActiveGame, GameError> {
        self.record(user)?
            .playing_game()
            .cloned()
            .ok_or(GameError::NoActiveGame)
    }

    /// The user's lifetime stats
    ///
    /// # Errors
    /// Returns [`GameError::Store`] if the record cannot be read.
    pub fn stats(&self, user: UserId) -> Result<UserStats, GameError> {
        Ok(self.record(user)?.stats)
    }

    /// The user's full record
    ///
    /// # Errors
    /// Returns [`GameError::Store`] if the record cannot be read.
    pub fn record(&self, user: UserId) -> Result<UserRecord, GameError> {
        self.locked(user, || Ok(self.store.load(user)?))
    }

    /// Turn the colorblind palette on or off for `user`
    ///
    /// # Errors
    /// Returns [`GameError::Store`] if the record cannot be read or written.
    #[instrument(skip(self))]
    pub fn set_colorblind(&self, user: UserId, enabled: bool) -> Result<(), GameError> {
        self.locked(user, || {
            let mut record = self.store.load(user)?;
            record.colorblind = enabled;
            self.store.save(user, &record)?;
            Ok(())
        })
    }

    fn validate_word(&self, language: &str, guess: &str) -> Result<(), GameError> {
        let length = guess.chars().count();
        if length != self.word_length {
            return Err(GameError::LengthMismatch {
                guess: length,
                answer: self.word_length,
            });
        }

        let alphabet = self
            .words
            .alphabet(language)
            .ok_or_else(|| GameError::UnsupportedLanguage {
                code: language.to_string(),
            })?;

        if !self.words.is_acceptable(language, guess) {
            return Err(GameError::UnknownWord {
                word: guess.to_string(),
            });
        }
        if !guess.chars().all(|ch| alphabet.contains(ch)) {
            return Err(GameError::InvalidLetters {
                alphabet: alphabet.to_string(),
            });
        }
        Ok(())
    }

    fn new_game(&self, language: &str) -> Result<ActiveGame, GameError> {
        let solutions =
            self.words
                .solution_words(language)
                .ok_or_else(|| GameError::UnsupportedLanguage {
                    code: language.to_string(),
                })?;
        let answer = self
            .picker
            .pick(solutions)
            .ok_or_else(|| GameError::EmptyWordList {
                code: language.to_string(),
            })?;

        info!(language, "Starting new game");
        Ok(ActiveGame::new(language, answer))
    }

    /// If the current game has ended, count it and detach it
    ///
    /// Returns the result and language to report once the record is saved.
    fn settle(user: UserId, record: &mut UserRecord) -> Option<(EndResult, String)> {
        let game = record.current_game.take_if(|game| !game.is_playing())?;

        let result = game.state();
        record.stats.record(result, game.language());
        info!(
            user,
            ?result,
            language = game.language(),
            guesses = game.board_state().len(),
            "Game over"
        );

        Some((result, game.language().to_string()))
    }

    fn report(&self, user: UserId, finished: Option<&(EndResult, String)>) {
        let Some((result, language)) = finished else {
            return;
        };
        if let Err(err) = self.reporter.report(user, *result, language) {
            warn!(user, error = %err, "Failed to report game stats");
        }
    }

    /// Run `op` while holding `user`'s lock
    ///
    /// The user's entry in the lock table is dropped again once no other
    /// caller holds it, so the table only tracks users with requests in flight.
    fn locked<T>(
        &self,
        user: UserId,
        op: impl FnOnce() -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(user).or_default())
        };

        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            op()
        };

        // Clones are only handed out under the table lock
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks
            .get(&user)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(&user);
        }
        result
    }
}
