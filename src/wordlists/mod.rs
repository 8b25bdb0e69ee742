//! Word lists and supported languages
//!
//! Each language has an alphabet, a list of possible answers, and a larger set
//! of words accepted as guesses. [`WordSource`] is what the game needs; the
//! file-backed [`Dictionary`] is one way to provide it.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;

/// A supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Short code used in file paths and stored games
    pub code: &'static str,
    /// Letters a guess may use
    pub alphabet: &'static str,
    /// Chat command that plays in this language
    pub command: &'static str,
    pub help: &'static str,
}

/// Every language the game ships with
pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        alphabet: "qwertyuiopasdfghjklzxcvbnm",
        command: "wordy",
        help: "Guess a word in your own personal Wordy game! [English]",
    },
    Language {
        code: "it",
        alphabet: "qwertyuiopasdfghjklzxcvbnm",
        command: "wordy_it",
        help: "Indovina una parola nel tuo gioco personale di Wordy! [Italiano]",
    },
    Language {
        code: "fr",
        alphabet: "azertyuiopqsdfghjklmwxcvbn",
        command: "moty",
        help: "Devinez un mot dans votre propre jeu Moty personnel! [Français]",
    },
    Language {
        code: "de",
        alphabet: "qwertzuiopasdfghjklyxcvbnm",
        command: "wörti",
        help: "Errate ein Wort in deinem persönlichen Wörti-Spiel! [Deutsch]",
    },
    Language {
        code: "no",
        alphabet: "qwertyuiopåasdfghjkløæzxcvbnm",
        command: "wørdy",
        help: "Gjett et ord i ditt personlige Wørdy spill!! [Norwegian Bokmål]",
    },
    Language {
        code: "at",
        alphabet: "qwertzuiopasdfghjklyxcvbnm",
        command: "wörti_at",
        help: "Errate ein Wort in deinem persönlichen Wörti-Spiel! [Österreichisch]",
    },
];

/// Look up a language by code
#[must_use]
pub fn language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Look up a language by its chat command
#[must_use]
pub fn language_for_command(command: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.command == command)
}

/// Already-loaded word lists the game plays from
pub trait WordSource: Send + Sync {
    /// Possible answers for `language`, or `None` if it is not loaded
    fn solution_words(&self, language: &str) -> Option<&[String]>;

    /// True if `word` may be guessed in `language`
    ///
    /// Every solution word is acceptable.
    fn is_acceptable(&self, language: &str, word: &str) -> bool;

    /// Letters a guess in `language` may use
    fn alphabet(&self, language: &str) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_commands_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
                assert_ne!(a.command, b.command);
            }
        }
    }

    #[test]
    fn lookup_by_code_and_command() {
        assert_eq!(language("fr").map(|l| l.command), Some("moty"));
        assert_eq!(language_for_command("wørdy").map(|l| l.code), Some("no"));
        assert!(language("xx").is_none());
    }

    #[test]
    fn alphabets_have_no_repeats() {
        for lang in LANGUAGES {
            let mut letters: Vec<char> = lang.alphabet.chars().collect();
            let total = letters.len();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), total, "{} alphabet repeats a letter", lang.code);
        }
    }
}
