//! Emoji result grid for sharing a finished game.

use crate::{
    evaluator::{LetterStatus, classify},
    session::MAX_ATTEMPTS,
    word::Word,
};

pub fn glyph(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => "🟩",
        LetterStatus::Present => "🟨",
        LetterStatus::Absent => "⬜",
    }
}

/// Renders `Wordle n/6` (or `X/6` for a loss), a blank line, then one
/// glyph row per guess in the order played.
pub fn build_share_text(guesses: &[Word], target: &Word, won: bool, attempts_used: usize) -> String {
    let score = if won {
        attempts_used.to_string()
    } else {
        "X".to_string()
    };

    let grid: Vec<String> = guesses
        .iter()
        .map(|guess| classify(target, guess).into_iter().map(glyph).collect::<String>())
        .collect();

    format!("Wordle {}/{}\n\n{}", score, MAX_ATTEMPTS, grid.join("\n"))
}
