//! File-backed word source

use super::loader::load_from_file;
use super::{LANGUAGES, Language, WordSource};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Default)]
struct WordList {
    alphabet: String,
    solutions: Vec<String>,
    accepted: FxHashSet<String>,
}

/// Word lists for any number of languages, loaded once and shared
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    languages: FxHashMap<String, WordList>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one language's lists
    ///
    /// # Examples
    /// ```
    /// use wordy::wordlists::{Dictionary, WordSource};
    ///
    /// let dict = Dictionary::new().with_language("en", "abcdefghijklmnopqrstuvwxyz", ["crane"], ["slate"]);
    /// assert!(dict.is_acceptable("en", "crane"));
    /// assert!(dict.is_acceptable("en", "slate"));
    /// assert_eq!(dict.solution_words("en").map(<[String]>::len), Some(1));
    /// ```
    #[must_use]
    pub fn with_language<S, A>(
        mut self,
        code: &str,
        alphabet: &str,
        solutions: S,
        accepted: A,
    ) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        self.languages.insert(
            code.to_string(),
            WordList {
                alphabet: alphabet.to_string(),
                solutions: solutions.into_iter().map(Into::into).collect(),
                accepted: accepted.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    /// Load one language from `<dir>/<code>/`
    ///
    /// Reads `solution_words.txt` and, if present, `accepted_words.txt`.
    ///
    /// # Errors
    /// Returns an I/O error if the solution list cannot be read, or the
    /// accepted list exists but cannot be read.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display(), code = language.code))]
    pub fn load_language(&mut self, dir: impl AsRef<Path>, language: &Language) -> io::Result<()> {
        let root = dir.as_ref().join(language.code);
        let solutions = load_from_file(root.join("solution_words.txt"))?;
        let accepted = match load_from_file(root.join("accepted_words.txt")) {
            Ok(words) => words,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err),
        };
        debug!(
            solutions = solutions.len(),
            accepted = accepted.len(),
            "Loaded word lists"
        );

        self.languages.insert(
            language.code.to_string(),
            WordList {
                alphabet: language.alphabet.to_string(),
                solutions,
                accepted: accepted.into_iter().collect(),
            },
        );
        Ok(())
    }

    /// Load every built-in language that has a solution list under `dir`
    ///
    /// Languages without files are skipped with a warning.
    ///
    /// # Errors
    /// Returns an I/O error for any failure other than a missing solution list.
    pub fn load_available(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        let mut dict = Self::new();
        for language in LANGUAGES {
            match dict.load_language(dir, language) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!(code = language.code, "No word lists found, skipping language");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(dict)
    }

    /// Codes of the loaded languages, sorted
    #[must_use]
    pub fn loaded(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl WordSource for Dictionary {
    fn solution_words(&self, language: &str) -> Option<&[String]> {
        self.languages
            .get(language)
            .map(|list| list.solutions.as_slice())
    }

    fn is_acceptable(&self, language: &str, word: &str) -> bool {
        self.languages.get(language).is_some_and(|list| {
            list.accepted.contains(word) || list.solutions.iter().any(|w| w == word)
        })
    }

    fn alphabet(&self, language: &str) -> Option<&str> {
        self.languages
            .get(language)
            .map(|list| list.alphabet.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::language;
    use std::fs;

    fn write_lists(dir: &Path, code: &str, solutions: &str, accepted: Option<&str>) {
        let root = dir.join(code);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("solution_words.txt"), solutions).unwrap();
        if let Some(accepted) = accepted {
            fs::write(root.join("accepted_words.txt"), accepted).unwrap();
        }
    }

    #[test]
    fn unknown_language_has_nothing() {
        let dict = Dictionary::new();
        assert!(dict.solution_words("en").is_none());
        assert!(dict.alphabet("en").is_none());
        assert!(!dict.is_acceptable("en", "crane"));
    }

    #[test]
    fn load_language_reads_both_lists() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), "en", "crane\nslate\n", Some("aahed\n"));

        let mut dict = Dictionary::new();
        dict.load_language(dir.path(), language("en").unwrap())
            .unwrap();

        assert_eq!(dict.solution_words("en").unwrap().to_vec(), ["crane", "slate"]);
        assert!(dict.is_acceptable("en", "aahed"));
        assert!(dict.is_acceptable("en", "slate"));
        assert!(!dict.is_acceptable("en", "zzzzz"));
        assert_eq!(dict.alphabet("en"), Some("qwertyuiopasdfghjklzxcvbnm"));
    }

    #[test]
    fn accepted_list_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), "fr", "livre\n", None);

        let mut dict = Dictionary::new();
        dict.load_language(dir.path(), language("fr").unwrap())
            .unwrap();
        assert!(dict.is_acceptable("fr", "livre"));
    }

    #[test]
    fn missing_solution_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = Dictionary::new();
        let err = dict
            .load_language(dir.path(), language("en").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_available_skips_missing_languages() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), "en", "crane\n", None);
        write_lists(dir.path(), "no", "bløte\n", None);

        let dict = Dictionary::load_available(dir.path()).unwrap();
        assert_eq!(dict.loaded(), ["en", "no"]);
    }
}
