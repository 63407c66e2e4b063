use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;
use tracing::info;

use crate::{
    notice::Notice,
    session::{GameSession, GuessEvent, SessionId},
    stats::{GameStats, StatsStore},
    wordlist::WordSource,
};

use super::types::LogBuffer;

/// Main application state container.
pub struct App {
    pub(in crate::ui) source: Box<dyn WordSource>,
    pub(in crate::ui) store: StatsStore,
    pub(in crate::ui) runtime: Handle,
    pub(in crate::ui) session: Option<GameSession>,
    pub(in crate::ui) stats: GameStats,
    pub(in crate::ui) notice: Option<Notice>,
    pub(in crate::ui) last_event: Option<GuessEvent>,
    pub(in crate::ui) share_text: Option<String>,
    pub(in crate::ui) show_stats: bool,
    pub(in crate::ui) strict: bool,
    pub(in crate::ui) next_session_id: u64,
    pub(in crate::ui) pending_request: Option<SessionId>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    /// Builds the app and loads stored statistics.
    ///
    /// `runtime` must belong to a runtime this thread is not running inside.
    pub fn new(
        source: Box<dyn WordSource>,
        store: StatsStore,
        runtime: Handle,
        strict: bool,
        logs: LogBuffer,
    ) -> Self {
        let stats = runtime.block_on(store.load());

        Self {
            source,
            store,
            runtime,
            session: None,
            stats,
            notice: None,
            last_event: None,
            share_text: None,
            show_stats: false,
            strict,
            next_session_id: 1,
            pending_request: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async persistence operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        self.runtime.block_on(future)
    }

    pub(in crate::ui) fn is_finished(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.state().is_terminal())
    }
}
