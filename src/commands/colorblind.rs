//! Colorblind preference command

use super::Reply;
use crate::game::{SessionManager, UserId};
use crate::render::Palette;
use crate::store::SessionStore;
use crate::wordlists::WordSource;

/// Switch the user's palette
pub fn handle_colorblind<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
    enabled: bool,
) -> Reply {
    if let Err(err) = sessions.set_colorblind(user, enabled) {
        return err.into();
    }
    let palette = Palette::for_mode(enabled);
    Reply::info(format!(
        "Colorblind mode {}: {} wrong spot, {} right spot",
        if enabled { "on" } else { "off" },
        palette.present,
        palette.correct
    ))
}
