//! Chat-style command lines
//!
//! Parses input such as `/moty livre`, `/surrender` or a bare word into a
//! [`Command`] and runs it.

use super::{
    Reply, handle_colorblind, handle_guess, handle_help, handle_show, handle_stats,
    handle_surrender,
};
use crate::game::{SessionManager, UserId};
use crate::store::SessionStore;
use crate::wordlists::{LANGUAGES, WordSource, language_for_command};

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess { language: String, word: String },
    Surrender,
    Stats,
    Show,
    Help,
    Colorblind(bool),
    Quit,
    Unknown(String),
}

/// Parse a line; a bare word is a guess in `default_language`
#[must_use]
pub fn parse_line(line: &str, default_language: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Guess {
            language: default_language.to_string(),
            word: line.to_string(),
        };
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));

    match name {
        "surrender" => Command::Surrender,
        "stats" => Command::Stats,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "colorblind" => match arg {
            "on" | "yes" | "true" => Command::Colorblind(true),
            "off" | "no" | "false" => Command::Colorblind(false),
            _ => Command::Unknown(line.to_string()),
        },
        _ => match language_for_command(name) {
            Some(lang) => Command::Guess {
                language: lang.code.to_string(),
                word: arg.to_string(),
            },
            None => Command::Unknown(line.to_string()),
        },
    }
}

/// Run a parsed command; `None` means the player wants to stop
pub fn execute<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
    command: Command,
) -> Option<Reply> {
    let reply = match command {
        Command::Guess { language, word } => handle_guess(sessions, user, &language, &word),
        Command::Surrender => handle_surrender(sessions, user),
        Command::Stats => handle_stats(sessions, user),
        Command::Show => handle_show(sessions, user),
        Command::Help => handle_help(LANGUAGES),
        Command::Colorblind(enabled) => handle_colorblind(sessions, user, enabled),
        Command::Quit => return None,
        Command::Unknown(line) => {
            Reply::error(format!("Unknown command `{line}`, try `/help`"))
        }
    };
    Some(reply)
}
