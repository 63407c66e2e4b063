mod board;
mod keyboard;
mod logs;
mod stats;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use crate::{evaluator::LetterStatus, ui::app::App};

/// Tile colours shared by the board and the keyboard.
pub(in crate::ui) fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default().bg(Color::Green).fg(Color::Black),
        Some(LetterStatus::Present) => Style::default().bg(Color::Yellow).fg(Color::Black),
        Some(LetterStatus::Absent) => Style::default().bg(Color::DarkGray).fg(Color::White),
        None => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = if self.show_stats {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(f.area())
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)])
                .split(f.area())
        };

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // status
                Constraint::Length(15), // board
                Constraint::Length(8),  // keyboard
                Constraint::Min(4),     // logs
            ])
            .split(main_layout[0]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_keyboard(f, left_layout[2]);
        self.draw_logs(f, left_layout[3]);

        if self.show_stats {
            self.draw_stats(f, main_layout[1]);
        }
    }
}
