//! Help command

use super::Reply;
use crate::render::STANDARD;
use crate::wordlists::Language;

/// How to play, with one line per language command
#[must_use]
pub fn handle_help(languages: &[Language]) -> Reply {
    let mut text = format!(
        "**Wordy is a Wordle-like clone that supports multiple languages.**\n\n\
         Choose the command fitting to the language you want to use and guess a word. \
         If Wordy returns a gray icon {} the letter does not exist. \
         If it returns a yellow icon {} the letter exists but is on the wrong spot. \
         If Wordy returns a green icon {} the letter is on the correct spot.\n\n\
         **To enter a guess (games are started automatically):** ```\n",
        STANDARD.absent, STANDARD.present, STANDARD.correct
    );

    for lang in languages {
        let command = format!("/{} <guess>", lang.command);
        text.push_str(&format!("{command:<19} {}\n", lang.help));
    }

    text.push_str(
        "```\nTo give up (or to switch languages) use `/surrender`.\n\
         Use `/colorblind on` for a blue and orange palette.",
    );
    Reply::info(text).titled("Wordy")
}
