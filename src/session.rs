//! Game session state machine.

use std::fmt;

use crate::{
    evaluator::{Classification, KeyboardStatus, classify},
    share::build_share_text,
    word::{WORD_LEN, Word, normalize_letter},
};

/// Number of guesses allowed per game.
pub const MAX_ATTEMPTS: usize = 6;

/// Identifies one session among those created by the same owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted guess together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub statuses: Classification,
}

/// Emitted once per accepted guess, carrying the full classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvent {
    pub session: SessionId,
    pub row: usize,
    pub word: Word,
    pub statuses: Classification,
    pub state: GameState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    InvalidLength { len: usize },
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "guess must have {WORD_LEN} letters, got {len}")
            }
            Self::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One game against a single target word.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    target: Word,
    attempts: Vec<Attempt>,
    current_row: usize,
    draft: Vec<char>,
    keyboard: KeyboardStatus,
    state: GameState,
}

impl GameSession {
    pub fn new(id: SessionId, target: Word) -> Self {
        Self {
            id,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            current_row: 0,
            draft: Vec::with_capacity(WORD_LEN),
            keyboard: KeyboardStatus::new(),
            state: GameState::InProgress,
        }
    }

    /// Starts over with a fresh target. Allowed in any state.
    pub fn reset(&mut self, id: SessionId, target: Word) {
        *self = Self::new(id, target);
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn draft(&self) -> &[char] {
        &self.draft
    }

    pub fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Adds a letter to the draft. Ignored when the game is over, the draft
    /// is full, or `c` is outside the alphabet.
    pub fn append_letter(&mut self, c: char) -> bool {
        if self.state.is_terminal() || self.draft.len() == WORD_LEN {
            return false;
        }
        match normalize_letter(c) {
            Some(letter) => {
                self.draft.push(letter);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.draft.pop().is_some()
    }

    /// The current draft as a word, if it is complete.
    pub fn draft_word(&self) -> Option<Word> {
        Word::from_letters(&self.draft).ok()
    }

    /// Submits the draft as the next guess.
    ///
    /// On a length mismatch nothing changes and the draft is kept.
    pub fn submit_guess(&mut self) -> Result<GuessEvent, SubmitError> {
        if self.state.is_terminal() {
            return Err(SubmitError::GameOver);
        }

        let guess = self.draft_word().ok_or(SubmitError::InvalidLength {
            len: self.draft.len(),
        })?;

        let statuses = classify(&self.target, &guess);
        self.attempts.push(Attempt {
            word: guess,
            statuses,
        });
        self.keyboard.record(&guess, &statuses);

        let row = self.current_row;
        if guess == self.target {
            self.state = GameState::Won;
        } else if row == MAX_ATTEMPTS - 1 {
            self.state = GameState::Lost;
        } else {
            self.draft.clear();
            self.current_row += 1;
        }

        Ok(GuessEvent {
            session: self.id,
            row,
            word: guess,
            statuses,
            state: self.state,
        })
    }

    /// Share text for a finished game; `None` while still in progress.
    pub fn share_text(&self) -> Option<String> {
        if !self.state.is_terminal() {
            return None;
        }
        let guesses: Vec<Word> = self.attempts.iter().map(|a| a.word).collect();
        Some(build_share_text(
            &guesses,
            &self.target,
            self.state == GameState::Won,
            self.attempts_used(),
        ))
    }
}
