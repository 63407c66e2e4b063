//! Game lifecycle: fetching words, submitting guesses, recording results.

use anyhow::Result;
use chrono::Local;
use tracing::{debug, warn};

use crate::{
    evaluator::format_pattern,
    notice::Notice,
    session::{GameSession, GameState, SessionId, SubmitError},
    word::Word,
};

use super::super::app::App;

/// Helper struct for managing game-specific state transitions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_new_game(&mut self) {
        let request = self.request_word();
        let result = self.app.source.next_word();
        self.complete_word_request(request, result);
    }

    /// Reserves the id of the next session. Any earlier outstanding
    /// request is superseded.
    pub fn request_word(&mut self) -> SessionId {
        let id = SessionId(self.app.next_session_id);
        self.app.next_session_id += 1;
        self.app.pending_request = Some(id);
        id
    }

    /// Applies a fetched word, unless a newer request has replaced `request`.
    pub fn complete_word_request(&mut self, request: SessionId, result: Result<Word>) {
        if self.app.pending_request != Some(request) {
            self.app
                .log(format!("Ignoring word fetched for abandoned session {}", request));
            return;
        }
        self.app.pending_request = None;

        match result {
            Ok(target) => {
                debug!("Session {} target: {}", request, target);
                match self.app.session.as_mut() {
                    Some(session) => session.reset(request, target),
                    None => self.app.session = Some(GameSession::new(request, target)),
                }
                self.app.notice = None;
                self.app.last_event = None;
                self.app.share_text = None;
                self.app.show_stats = false;
                self.app.log(format!("New game started ({})", request));
            }
            Err(e) => {
                warn!("Failed to load word: {:#}", e);
                self.app.log("Failed to load a word");
                self.app.notice = Some(Notice::WordLoadFailed);
            }
        }
    }

    pub fn append_letter(&mut self, c: char) {
        if let Some(session) = self.app.session.as_mut()
            && session.append_letter(c)
        {
            self.app.notice = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.app.session.as_mut()
            && session.backspace()
        {
            self.app.notice = None;
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(session) = self.app.session.as_mut() else {
            return;
        };

        if self.app.strict
            && let Some(word) = session.draft_word()
            && !self.app.source.is_valid_word(&word.to_string())
        {
            self.app.log(format!("Rejected guess not in word list: {}", word));
            self.app.notice = Some(Notice::NotInWordList(word));
            return;
        }

        match session.submit_guess() {
            Ok(event) => {
                self.app.log(format!(
                    "Guess {}: {} {}",
                    event.row + 1,
                    event.word,
                    format_pattern(&event.statuses)
                ));
                let finished = event.state.is_terminal();
                self.app.last_event = Some(event);
                if finished {
                    self.finish_game();
                }
            }
            Err(SubmitError::InvalidLength { len }) => {
                self.app.log(format!("Input rejected: {} letters", len));
                self.app.notice = Some(Notice::InvalidLength);
            }
            Err(SubmitError::GameOver) => {}
        }
    }

    /// Records the outcome of a finished session and prepares the summary.
    fn finish_game(&mut self) {
        let Some(session) = self.app.session.as_ref() else {
            return;
        };

        let won = session.state() == GameState::Won;
        let attempts = session.attempts_used();
        let target = *session.target();
        let share_text = session.share_text();

        let updated = self
            .app
            .stats
            .record_outcome(won, attempts)
            .with_last_played(Local::now().date_naive());
        self.app.stats = updated.clone();

        if let Err(e) = self.app.run_db_operation(self.app.store.save(&updated)) {
            warn!("{:#}", e);
            self.app.log("Statistics could not be saved");
        }

        if won {
            self.app.log(format!("Game won in {} guesses", attempts));
            self.app.notice = Some(Notice::Won { attempts });
        } else {
            self.app.log(format!("Game lost, target was {}", target));
            self.app.notice = Some(Notice::Lost { target });
        }

        self.app.share_text = share_text;
        self.app.show_stats = true;
    }

    pub fn toggle_stats(&mut self) {
        self.app.show_stats = !self.app.show_stats;
    }
}
