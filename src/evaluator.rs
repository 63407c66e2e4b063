use anyhow::Result;
use std::{
    collections::{BTreeMap, HashMap},
    convert::TryFrom,
};

use crate::word::{WORD_LEN, Word};

/// Per-letter result of comparing a guess against the target.
///
/// Ordered by strength so the keyboard can keep the best status seen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    pub fn pattern_char(self) -> char {
        match self {
            LetterStatus::Correct => 'G',
            LetterStatus::Present => 'Y',
            LetterStatus::Absent => 'X',
        }
    }
}

impl TryFrom<char> for LetterStatus {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'G' => Ok(LetterStatus::Correct),
            'Y' => Ok(LetterStatus::Present),
            'X' => Ok(LetterStatus::Absent),
            _ => Err(value),
        }
    }
}

pub type Classification = [LetterStatus; WORD_LEN];

/// Parses a `G`/`Y`/`X` pattern such as `"GYXXG"`.
pub fn parse_pattern(pattern: &str) -> Result<Classification> {
    let statuses = pattern
        .chars()
        .map(|c| {
            LetterStatus::try_from(c)
                .map_err(|bad| anyhow::anyhow!("invalid pattern character: {}", bad))
        })
        .collect::<Result<Vec<_>>>()?;

    Classification::try_from(statuses.as_slice())
        .map_err(|_| anyhow::anyhow!("pattern must have {} characters", WORD_LEN))
}

pub fn format_pattern(statuses: &Classification) -> String {
    statuses.iter().map(|s| s.pattern_char()).collect()
}

/// Classifies every position of `guess` against `target`.
///
/// Exact matches are claimed first; the remaining target letters are then
/// handed out left to right, so a repeated guess letter is only marked
/// present as many times as the target still has it.
pub fn classify(target: &Word, guess: &Word) -> Classification {
    let t = target.letters();
    let g = guess.letters();

    let mut result = [LetterStatus::Absent; WORD_LEN];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    // Correct pass
    for i in 0..WORD_LEN {
        if g[i] == t[i] {
            result[i] = LetterStatus::Correct;
        } else {
            *remaining.entry(t[i]).or_insert(0) += 1;
        }
    }

    // Present pass
    for i in 0..WORD_LEN {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g[i])
            && *count > 0
        {
            *count -= 1;
            result[i] = LetterStatus::Present;
        }
    }

    result
}

/// Best status seen so far for each letter, across all guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: BTreeMap<char, LetterStatus>,
}

impl KeyboardStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one classified guess. A letter's status never goes down.
    pub fn record(&mut self, guess: &Word, statuses: &Classification) {
        for (&letter, &status) in guess.letters().iter().zip(statuses.iter()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
