//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::super::app::App;
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handles one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                self.app.log("New game requested");
                GameHandler::new(self.app).start_new_game();
            }

            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).toggle_stats();
            }

            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Backspace, _) => GameHandler::new(self.app).backspace(),
            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).append_letter(c);
            }
            _ => {}
        }
        false
    }

    fn submit_input(&mut self) {
        if self.app.session.is_none() || self.app.is_finished() {
            self.app.log("Starting new game");
            GameHandler::new(self.app).start_new_game();
            return;
        }

        GameHandler::new(self.app).submit_guess();
    }
}
