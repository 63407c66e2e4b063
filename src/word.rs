//! Five-letter words over the game alphabet (A-Z plus Ñ).

use std::fmt;
use std::str::FromStr;

/// Number of letters in every target and guess.
pub const WORD_LEN: usize = 5;

/// Maps a typed character onto the game alphabet.
///
/// Returns the uppercase form for `a-z`, `A-Z`, `ñ` and `Ñ`, and `None`
/// for anything else.
pub fn normalize_letter(c: char) -> Option<char> {
    match c {
        'A'..='Z' | 'Ñ' => Some(c),
        'a'..='z' => Some(c.to_ascii_uppercase()),
        'ñ' => Some('Ñ'),
        _ => None,
    }
}

/// Error type for strings that are not valid game words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "invalid character in word: {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

/// An immutable uppercase word of exactly [`WORD_LEN`] letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [char; WORD_LEN],
}

impl Word {
    /// Parses and normalizes a word. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [' '; WORD_LEN];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = normalize_letter(c).ok_or(WordError::InvalidCharacter(c))?;
        }

        Ok(Self { letters })
    }

    /// Builds a word from already-normalized letters.
    pub fn from_letters(letters: &[char]) -> Result<Self, WordError> {
        if letters.len() != WORD_LEN {
            return Err(WordError::InvalidLength(letters.len()));
        }

        let mut out = [' '; WORD_LEN];
        for (slot, &c) in out.iter_mut().zip(letters) {
            *slot = normalize_letter(c).ok_or(WordError::InvalidCharacter(c))?;
        }

        Ok(Self { letters: out })
    }

    pub fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
