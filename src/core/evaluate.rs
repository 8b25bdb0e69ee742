//! Guess evaluation
//!
//! Scores a guess against the answer letter by letter, with Wordle's rules for
//! repeated letters.

use super::LetterState;
use derive_more::{Display, Error};
use rustc_hash::FxHashMap;

/// Error returned when a guess cannot be scored against an answer
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvaluateError {
    /// Guess and answer have a different number of letters
    #[display("guess has {guess} letters but the answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },
}

/// Score `guess` against `answer`, one [`LetterState`] per letter
///
/// Letters are compared as Unicode scalar values, so alphabets such as
/// Norwegian `æøå` count as one letter each.
///
/// # Algorithm
/// 1. First pass: every position where guess and answer differ adds one to the
///    unclaimed count of the *answer's* letter there
/// 2. Second pass, left to right: exact matches are correct and never touch the
///    counts; otherwise a letter with an unclaimed occurrence is present and
///    claims it, and anything else is absent
///
/// Each answer letter is credited to at most one guess position.
///
/// # Errors
/// Returns [`EvaluateError::LengthMismatch`] if the two words differ in length.
///
/// # Examples
/// ```
/// use wordy::core::{LetterState::*, evaluate_guess};
///
/// let result = evaluate_guess("aaab", "abca").unwrap();
/// assert_eq!(result, vec![Correct, Present, Absent, Present]);
/// ```
pub fn evaluate_guess(guess: &str, answer: &str) -> Result<Vec<LetterState>, EvaluateError> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    if guess.len() != answer.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    // Unclaimed answer letters, ignoring exact matches
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for (&g, &a) in guess.iter().zip(&answer) {
        if g != a {
            *available.entry(a).or_insert(0) += 1;
        }
    }

    let result = guess
        .iter()
        .zip(&answer)
        .map(|(&g, &a)| {
            if g == a {
                return LetterState::Correct;
            }
            match available.get_mut(&g) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterState::Present
                }
                _ => LetterState::Absent,
            }
        })
        .collect();

    Ok(result)
}

/// True when every letter in `result` is correct
#[must_use]
pub fn is_solved(result: &[LetterState]) -> bool {
    result.iter().all(|&state| state == LetterState::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    #[test]
    fn single_letters() {
        assert_eq!(evaluate_guess("a", "a").unwrap(), vec![Correct]);
        assert_eq!(evaluate_guess("b", "a").unwrap(), vec![Absent]);
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(evaluate_guess("abcd", "abcd").unwrap(), vec![Correct; 4]);
        for word in ["crane", "wordle", "aaaaa", "bløte"] {
            let result = evaluate_guess(word, word).unwrap();
            assert!(is_solved(&result), "{word} should solve itself");
        }
    }

    #[test]
    fn correct_letter_is_not_reused_as_present() {
        assert_eq!(evaluate_guess("aa", "ab").unwrap(), vec![Correct, Absent]);
        assert_eq!(evaluate_guess("aa", "ba").unwrap(), vec![Absent, Correct]);
    }

    #[test]
    fn wrong_spot_is_present() {
        assert_eq!(evaluate_guess("ac", "ba").unwrap(), vec![Present, Absent]);
    }

    #[test]
    fn repeated_guess_letter_against_single_answer_letter() {
        // Answer "abcd" holds one a, already matched at position 0
        assert_eq!(
            evaluate_guess("aaaa", "abcd").unwrap(),
            vec![Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn repeated_letters_both_ends_matched() {
        // Both a's in "abca" are exact matches, nothing left to claim
        assert_eq!(
            evaluate_guess("aaaa", "abca").unwrap(),
            vec![Correct, Absent, Absent, Correct]
        );
    }

    #[test]
    fn leftmost_guess_letter_claims_the_spare() {
        assert_eq!(
            evaluate_guess("aaaz", "abca").unwrap(),
            vec![Correct, Present, Absent, Absent]
        );
        assert_eq!(
            evaluate_guess("aaab", "abca").unwrap(),
            vec![Correct, Present, Absent, Present]
        );
    }

    #[test]
    fn later_exact_match_is_counted_first() {
        // ROBOT vs FLOOR: second o is exact, first o takes the other one
        assert_eq!(
            evaluate_guess("robot", "floor").unwrap(),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn speed_vs_erase() {
        assert_eq!(
            evaluate_guess("speed", "erase").unwrap(),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn non_ascii_letters_count_once() {
        assert_eq!(
            evaluate_guess("søker", "køler").unwrap(),
            vec![Absent, Correct, Present, Correct, Correct]
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            evaluate_guess("abc", "abcd"),
            Err(EvaluateError::LengthMismatch {
                guess: 3,
                answer: 4
            })
        );
    }

    #[test]
    fn long_words_keep_full_counts() {
        let answer = "a".repeat(300);
        let guess = "b".repeat(300);
        assert_eq!(evaluate_guess(&guess, &answer).unwrap(), vec![Absent; 300]);

        // Every unmatched a is still available to a shifted guess
        let guess = format!("b{}", "a".repeat(299));
        let answer = format!("{}b", "a".repeat(299));
        let result = evaluate_guess(&guess, &answer).unwrap();
        assert_eq!(result[0], Present);
        assert_eq!(result[298], Correct);
        assert_eq!(result[299], Present);
    }

    #[test]
    fn credit_never_exceeds_answer_occurrences() {
        let words = [
            "aabbc", "abcab", "ccccc", "baaab", "cabba", "abcde", "eeeaa", "aaaaa",
        ];
        for guess in words {
            for answer in words {
                let result = evaluate_guess(guess, answer).unwrap();
                for letter in guess.chars() {
                    let credited = guess
                        .chars()
                        .zip(&result)
                        .filter(|&(g, &s)| g == letter && s != Absent)
                        .count();
                    let occurrences = answer.chars().filter(|&a| a == letter).count();
                    assert!(
                        credited <= occurrences,
                        "{guess} vs {answer}: {letter} credited {credited} > {occurrences}"
                    );
                }
            }
        }
    }
}
