//! Surrender command

use super::{Reply, Tone};
use crate::game::{SessionManager, UserId};
use crate::store::SessionStore;
use crate::wordlists::WordSource;

/// Give up the current game and reveal the answer
pub fn handle_surrender<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
) -> Reply {
    match sessions.surrender(user) {
        Ok(answer) => Reply::info(format!("You coward! 🙄\nYour word was `{answer}`!"))
            .with_tone(Tone::Failure),
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handle_guess;
    use crate::commands::testing::sessions;

    #[test]
    fn reveals_answer() {
        let sessions = sessions("crane");
        handle_guess(&sessions, 1, "en", "slate");

        let reply = handle_surrender(&sessions, 1);
        assert_eq!(reply.text, "You coward! 🙄\nYour word was `crane`!");
        assert_eq!(sessions.stats(1).unwrap().surrenders, 1);
    }

    #[test]
    fn no_game_yet() {
        let sessions = sessions("crane");
        let reply = handle_surrender(&sessions, 1);
        assert_eq!(reply.text, "You haven't started a game yet!");
        assert_eq!(reply.tone, Tone::Error);
    }
}
