//! Show command

use super::Reply;
use crate::game::{SessionManager, UserId};
use crate::render::render_board;
use crate::store::SessionStore;
use crate::wordlists::WordSource;

/// Render the current board without changing it
pub fn handle_show<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
) -> Reply {
    let record = match sessions.record(user) {
        Ok(record) => record,
        Err(err) => return err.into(),
    };
    let Some(game) = record.playing_game() else {
        return Reply::error("You haven't started a game yet!");
    };

    let remaining = (game.word_length() + 1).saturating_sub(game.board_state().len());
    Reply::info(format!(
        "Playing in `{}`, {remaining} guesses left:\n```\n{}```",
        game.language(),
        render_board(game, record.colorblind)
    ))
    .titled("Wordy")
}
