use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{notice::Notice, session::MAX_ATTEMPTS, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let status_text = match (&self.notice, &self.session) {
            (Some(notice), _) => notice.to_string(),
            (None, Some(session)) if session.state().is_terminal() => {
                "Enter: new game | Ctrl+S: stats | Ctrl+Q: quit".to_string()
            }
            (None, Some(session)) => format!(
                "Guess {}/{} | Ctrl+N: new game | Ctrl+S: stats | Ctrl+Q: quit",
                session.current_row() + 1,
                MAX_ATTEMPTS
            ),
            (None, None) => "Ctrl+N: new game | Ctrl+Q: quit".to_string(),
        };

        let color = match &self.notice {
            Some(Notice::Won { .. }) => Color::Green,
            Some(Notice::Lost { .. }) | Some(Notice::WordLoadFailed) => Color::Red,
            Some(Notice::InvalidLength) | Some(Notice::NotInWordList(_)) => Color::Yellow,
            None => Color::White,
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Wordle")),
            area,
        );
    }
}
