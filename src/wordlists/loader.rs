//! Word list loading utilities
//!
//! Word files hold one word per line. Blank lines are skipped and words are
//! lowercased.

use std::fs;
use std::io;
use std::path::Path;

/// Parse word list text
///
/// # Examples
/// ```
/// use wordy::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\n slate \n");
/// assert_eq!(words, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/en/solution_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}
