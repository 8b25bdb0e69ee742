//! Guess command

use super::{Reply, Tone};
use crate::game::{EndResult, SessionManager, UserId};
use crate::render::render_board;
use crate::store::SessionStore;
use crate::wordlists::{WordSource, language};

/// Submit `input` as a guess, starting a game if needed
pub fn handle_guess<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
    lang: &str,
    input: &str,
) -> Reply {
    if input.trim().is_empty() {
        let command = language(lang).map_or("wordy", |l| l.command);
        return Reply::info(format!(
            "To play Wordy simply type `/{command} <guess>` to start or continue your own personal game."
        ));
    }

    let outcome = match sessions.submit_guess(user, lang, input) {
        Ok(outcome) => outcome,
        Err(err) => return err.into(),
    };
    let game = &outcome.game;

    let mut text = String::new();
    if outcome.started {
        text.push_str("Starting a new game...\n");
    }
    text.push_str("Your results so far:\n```\n");
    text.push_str(&render_board(game, outcome.colorblind));
    text.push_str("```");

    let tone = match game.state() {
        EndResult::Win => {
            text.push_str(&format!(
                "\nCongratulations! 🎉\nCompleted in {} guesses!",
                game.board_state().len()
            ));
            Tone::Success
        }
        EndResult::Lose => {
            text.push_str(&format!(
                "\nNo more guesses! 😭\nYour word was `{}`!",
                game.answer()
            ));
            Tone::Failure
        }
        EndResult::Playing | EndResult::Surrender => Tone::Info,
    };

    Reply::info(text).titled("Wordy").with_tone(tone)
}
