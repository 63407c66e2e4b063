//! UI module tests.

use std::{cell::RefCell, collections::VecDeque};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Runtime;

use super::{
    app::App,
    handlers::{GameHandler, InputHandler},
    types::LogBuffer,
};
use crate::{
    db,
    notice::Notice,
    session::{GameState, SessionId},
    stats::{GameStats, StatsStore},
    word::Word,
    wordlist::WordSource,
};

/// Hands out a fixed sequence of targets, then fails.
struct ScriptedSource {
    targets: RefCell<VecDeque<Word>>,
    vocabulary: Vec<Word>,
}

impl ScriptedSource {
    fn new(targets: &[&str]) -> Self {
        let targets: VecDeque<Word> = targets.iter().map(|w| Word::parse(w).unwrap()).collect();
        let mut vocabulary: Vec<Word> = targets.iter().copied().collect();
        for w in ["PERRO", "MUNDO", "LETRA", "JUEGO", "LIBRO", "PLAZA", "TOGAS", "ZEBRA"] {
            vocabulary.push(Word::parse(w).unwrap());
        }
        Self {
            targets: RefCell::new(targets),
            vocabulary,
        }
    }
}

impl WordSource for ScriptedSource {
    fn next_word(&self) -> Result<Word> {
        self.targets
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("word service unavailable"))
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        Word::parse(candidate)
            .map(|w| self.vocabulary.contains(&w))
            .unwrap_or(false)
    }
}

fn create_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn create_store(rt: &Runtime) -> StatsStore {
    StatsStore::new(rt.block_on(db::create_memory_pool()).unwrap())
}

/// Helper function to create a test app over the given targets.
fn create_test_app(rt: &Runtime, targets: &[&str], strict: bool) -> (App, StatsStore) {
    let store = create_store(rt);
    let app = App::new(
        Box::new(ScriptedSource::new(targets)),
        store.clone(),
        rt.handle().clone(),
        strict,
        LogBuffer::new(),
    );
    (app, store)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_guess(app: &mut App, word: &str) {
    for c in word.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let rt = create_runtime();
        let (app, _) = create_test_app(&rt, &["GATOS"], false);

        assert!(app.session.is_none());
        assert_eq!(app.stats, GameStats::default());
        assert!(app.notice.is_none());
        assert!(!app.show_stats);
    }

    #[test]
    fn test_app_loads_saved_stats() {
        let rt = create_runtime();
        let store = create_store(&rt);
        let saved = GameStats::default().record_outcome(true, 2);
        rt.block_on(store.save(&saved)).unwrap();

        let app = App::new(
            Box::new(ScriptedSource::new(&["GATOS"])),
            store,
            rt.handle().clone(),
            false,
            LogBuffer::new(),
        );
        assert_eq!(app.stats, saved);
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Test message 1");
        assert_eq!(lines[1], "Test message 2");
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert_eq!(lines.last().unwrap(), "Message 349");
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;

    #[test]
    fn test_start_new_game() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);

        GameHandler::new(&mut app).start_new_game();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.target().to_string(), "GATOS");
        assert_eq!(session.state(), GameState::InProgress);
        assert!(app.pending_request.is_none());
    }

    #[test]
    fn test_word_load_failure_keeps_current_game() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();
        type_guess(&mut app, "PERRO");

        GameHandler::new(&mut app).start_new_game();

        assert_eq!(app.notice, Some(Notice::WordLoadFailed));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.target().to_string(), "GATOS");
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn test_stale_word_is_ignored() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &[], false);

        let mut handler = GameHandler::new(&mut app);
        let first = handler.request_word();
        let second = handler.request_word();
        assert_ne!(first, second);

        handler.complete_word_request(first, Ok(Word::parse("GATOS").unwrap()));
        assert!(app.session.is_none());

        GameHandler::new(&mut app).complete_word_request(second, Ok(Word::parse("PIZZA").unwrap()));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.id(), second);
        assert_eq!(session.target().to_string(), "PIZZA");
    }

    #[test]
    fn test_new_game_replaces_session() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS", "PIZZA"], false);
        GameHandler::new(&mut app).start_new_game();
        type_guess(&mut app, "PERRO");

        GameHandler::new(&mut app).start_new_game();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.id(), SessionId(2));
        assert_eq!(session.target().to_string(), "PIZZA");
        assert!(session.attempts().is_empty());
        assert!(app.last_event.is_none());
    }

    #[test]
    fn test_win_on_third_guess_records_stats() {
        let rt = create_runtime();
        let (mut app, store) = create_test_app(&rt, &["PIZZA"], false);
        GameHandler::new(&mut app).start_new_game();

        type_guess(&mut app, "ZEBRA");
        type_guess(&mut app, "PLAZA");
        type_guess(&mut app, "PIZZA");

        assert_eq!(app.session.as_ref().unwrap().state(), GameState::Won);
        assert_eq!(app.notice, Some(Notice::Won { attempts: 3 }));
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.current_streak, 1);
        assert_eq!(app.stats.max_streak, 1);
        assert_eq!(app.stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
        assert!(app.stats.last_played_date.is_some());
        assert!(app.show_stats);

        let share = app.share_text.as_deref().unwrap();
        assert!(share.starts_with("Wordle 3/6\n\n"));
        assert_eq!(share.lines().count(), 5);

        assert_eq!(rt.block_on(store.load()), app.stats);
    }

    #[test]
    fn test_six_misses_lose_the_game() {
        let rt = create_runtime();
        let (mut app, store) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        for w in ["PERRO", "MUNDO", "LETRA", "JUEGO", "LIBRO", "PLAZA"] {
            type_guess(&mut app, w);
        }

        assert_eq!(app.session.as_ref().unwrap().state(), GameState::Lost);
        assert_eq!(
            app.notice,
            Some(Notice::Lost {
                target: Word::parse("GATOS").unwrap()
            })
        );
        assert!(app.notice.as_ref().unwrap().to_string().contains("GATOS"));
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.current_streak, 0);
        assert_eq!(app.stats.guess_distribution, [0; 6]);
        assert!(app.share_text.as_deref().unwrap().starts_with("Wordle X/6"));
        assert_eq!(rt.block_on(store.load()), app.stats);
    }

    #[test]
    fn test_save_failure_does_not_block_game() {
        let rt = create_runtime();
        let pool = rt.block_on(db::create_memory_pool()).unwrap();
        let mut app = App::new(
            Box::new(ScriptedSource::new(&["GATOS"])),
            StatsStore::new(pool.clone()),
            rt.handle().clone(),
            false,
            LogBuffer::new(),
        );
        GameHandler::new(&mut app).start_new_game();
        rt.block_on(pool.close());

        type_guess(&mut app, "GATOS");

        assert_eq!(app.session.as_ref().unwrap().state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.notice, Some(Notice::Won { attempts: 1 }));
    }

    #[test]
    fn test_toggle_stats() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);

        GameHandler::new(&mut app).toggle_stats();
        assert!(app.show_stats);
        GameHandler::new(&mut app).toggle_stats();
        assert!(!app.show_stats);
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_typing_fills_draft() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        for c in ['g', 'a', '7', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.session.as_ref().unwrap().draft(), &['G', 'A']);
    }

    #[test]
    fn test_short_guess_shows_notice_and_keeps_draft() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        type_guess(&mut app, "GAT");

        assert_eq!(app.notice, Some(Notice::InvalidLength));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.draft(), &['G', 'A', 'T']);
        assert!(session.attempts().is_empty());

        press(&mut app, KeyCode::Char('o'));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_guess_event_is_recorded() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        type_guess(&mut app, "togas");

        let event = app.last_event.as_ref().unwrap();
        assert_eq!(event.row, 0);
        assert_eq!(event.word.to_string(), "TOGAS");
        assert_eq!(crate::evaluator::format_pattern(&event.statuses), "YYYYG");
    }

    #[test]
    fn test_unknown_word_accepted_when_not_strict() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        type_guess(&mut app, "QWXYZ");

        assert_eq!(app.session.as_ref().unwrap().attempts().len(), 1);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_word() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], true);
        GameHandler::new(&mut app).start_new_game();

        type_guess(&mut app, "QWXYZ");

        assert_eq!(
            app.notice,
            Some(Notice::NotInWordList(Word::parse("QWXYZ").unwrap()))
        );
        let session = app.session.as_ref().unwrap();
        assert!(session.attempts().is_empty());
        assert_eq!(session.draft().len(), 5);
    }

    #[test]
    fn test_enter_after_finish_starts_new_game() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS", "PIZZA"], false);
        GameHandler::new(&mut app).start_new_game();
        type_guess(&mut app, "GATOS");
        assert!(app.is_finished());

        press(&mut app, KeyCode::Enter);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.target().to_string(), "PIZZA");
        assert_eq!(session.state(), GameState::InProgress);
        assert!(app.share_text.is_none());
        assert!(!app.show_stats);
    }

    #[test]
    fn test_quit_keys() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);

        assert!(press(&mut app, KeyCode::Esc));
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(InputHandler::new(&mut app).handle_key(ctrl_q));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let rt = create_runtime();
        let (mut app, _) = create_test_app(&rt, &["GATOS"], false);
        GameHandler::new(&mut app).start_new_game();

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        InputHandler::new(&mut app).handle_key(ctrl_s);

        assert!(app.session.as_ref().unwrap().draft().is_empty());
        assert!(app.show_stats);
    }
}
