use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::KEYBOARD_ROWS};

use super::status_style;

impl App {
    pub(in crate::ui) fn draw_keyboard(&self, f: &mut Frame, area: Rect) {
        let keyboard = self.session.as_ref().map(|s| s.keyboard());

        let mut lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .chars()
                    .flat_map(|c| {
                        let status = keyboard.and_then(|k| k.get(c));
                        [
                            Span::styled(format!(" {} ", c), status_style(status)),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from("Enter: submit | Backspace: delete"));

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Keyboard")),
            area,
        );
    }
}
