//! Feedback glyphs
//!
//! Two palettes: the standard one and a colorblind one. Absent letters look the
//! same in both.

use crate::core::LetterState;
use crate::game::ActiveGame;

/// Glyphs for absent, present and correct letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub absent: char,
    pub present: char,
    pub correct: char,
}

/// Yellow and green
pub const STANDARD: Palette = Palette {
    absent: '⬛',
    present: '🟨',
    correct: '🟩',
};

/// Blue and orange
pub const COLORBLIND: Palette = Palette {
    absent: '⬛',
    present: '🟦',
    correct: '🟧',
};

impl Palette {
    #[must_use]
    pub const fn for_mode(colorblind: bool) -> Self {
        if colorblind { COLORBLIND } else { STANDARD }
    }

    #[must_use]
    pub const fn glyph(self, state: LetterState) -> char {
        match state {
            LetterState::Absent => self.absent,
            LetterState::Present => self.present,
            LetterState::Correct => self.correct,
        }
    }
}

/// Render one feedback row, one glyph per letter
///
/// # Examples
/// ```
/// use wordy::core::LetterState::*;
/// use wordy::render::render_result;
///
/// assert_eq!(render_result(&[Absent, Present, Correct], false), "⬛🟨🟩");
/// assert_eq!(render_result(&[Absent, Present, Correct], true), "⬛🟦🟧");
/// ```
#[must_use]
pub fn render_result(result: &[LetterState], colorblind: bool) -> String {
    let palette = Palette::for_mode(colorblind);
    result.iter().map(|&state| palette.glyph(state)).collect()
}

/// Render every guess so far as `<glyphs> <word>` lines
#[must_use]
pub fn render_board(game: &ActiveGame, colorblind: bool) -> String {
    game.rows()
        .map(|(word, result)| format!("{} {word}\n", render_result(result, colorblind)))
        .collect()
}
