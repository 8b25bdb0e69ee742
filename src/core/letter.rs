//! Per-letter feedback

use serde::{Deserialize, Serialize};

/// Classification of one guessed letter against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Letter has no unclaimed occurrence in the answer
    Absent,
    /// Letter occurs in the answer, but somewhere else
    Present,
    /// Letter is in the right spot
    Correct,
}
