//! Six-row guess board.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    session::{GameSession, MAX_ATTEMPTS},
    ui::app::App,
    word::WORD_LEN,
};

use super::status_style;

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let lines = match &self.session {
            Some(session) => board_lines(session),
            None => vec![Line::from("Waiting for a word...")],
        };

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Board")),
            area,
        );
    }
}

fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let empty = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = match session.attempts().get(row) {
            Some(attempt) => attempt
                .word
                .letters()
                .iter()
                .zip(attempt.statuses.iter())
                .map(|(c, status)| Span::styled(format!(" {} ", c), status_style(Some(*status))))
                .collect(),
            None if row == session.current_row() && !session.state().is_terminal() => {
                let draft = session.draft();
                (0..WORD_LEN)
                    .map(|i| match draft.get(i) {
                        Some(c) => Span::styled(format!(" {} ", c), Style::default().fg(Color::White)),
                        None => Span::styled(" _ ", empty),
                    })
                    .collect()
            }
            None => (0..WORD_LEN).map(|_| Span::styled(" · ", empty)).collect(),
        };

        let mut spaced = Vec::with_capacity(spans.len() * 2);
        for (i, span) in spans.into_iter().enumerate() {
            if i > 0 {
                spaced.push(Span::raw(" "));
            }
            spaced.push(span);
        }

        lines.push(Line::from(spaced));
        lines.push(Line::from(""));
    }

    lines
}
