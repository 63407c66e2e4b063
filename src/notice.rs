//! Short messages shown to the player after an action.

use std::fmt;

use crate::word::{WORD_LEN, Word};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidLength,
    NotInWordList(Word),
    WordLoadFailed,
    Won { attempts: usize },
    Lost { target: Word },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "The word must have {WORD_LEN} letters!"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
            Self::WordLoadFailed => write!(f, "Could not load a word, press Ctrl+N to retry"),
            Self::Won { attempts: 1 } => write!(f, "You won in 1 guess! 🎉"),
            Self::Won { attempts } => write!(f, "You won in {attempts} guesses! 🎉"),
            Self::Lost { target } => write!(f, "Game over. The word was {target}"),
        }
    }
}
