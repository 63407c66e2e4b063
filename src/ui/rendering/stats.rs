//! Statistics panel with guess distribution and share text.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    session::{GameState, MAX_ATTEMPTS},
    stats::GameStats,
    ui::app::App,
};

const BAR_WIDTH: usize = 24;

impl App {
    pub(in crate::ui) fn draw_stats(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // totals
                Constraint::Length(10), // distribution
                Constraint::Min(4),     // share text
            ])
            .split(area);

        draw_totals(f, chunks[0], &self.stats);
        draw_distribution(f, chunks[1], &self.stats, self.last_won_row());
        self.draw_share(f, chunks[2]);
    }

    /// Distribution row to highlight after a win.
    fn last_won_row(&self) -> Option<usize> {
        self.last_event
            .as_ref()
            .filter(|e| e.state == GameState::Won)
            .map(|e| e.row)
    }

    fn draw_share(&self, f: &mut Frame, area: Rect) {
        let text = self
            .share_text
            .clone()
            .unwrap_or_else(|| "Finish a game to get a shareable result.".to_string());

        f.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Share")),
            area,
        );
    }
}

fn draw_totals(f: &mut Frame, area: Rect, stats: &GameStats) {
    let value = |v: String, color: Color| {
        Span::styled(v, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Played: "),
            value(stats.games_played.to_string(), Color::Cyan),
            Span::raw("  |  Win %: "),
            value(stats.win_percentage().to_string(), Color::Green),
        ]),
        Line::from(vec![
            Span::raw("  Streak: "),
            value(stats.current_streak.to_string(), Color::Green),
            Span::raw("  |  Best: "),
            value(stats.max_streak.to_string(), Color::Yellow),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Statistics | Ctrl+S: close"),
        ),
        area,
    );
}

fn draw_distribution(f: &mut Frame, area: Rect, stats: &GameStats, highlight: Option<usize>) {
    let bars = stats.distribution_bars(BAR_WIDTH);
    let mut lines = vec![Line::from("")];

    for i in 0..MAX_ATTEMPTS {
        let color = if highlight == Some(i) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", i + 1)),
            Span::styled("█".repeat(bars[i]), Style::default().fg(color)),
            Span::raw(format!(" {}", stats.guess_distribution[i])),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Guess Distribution"),
        ),
        area,
    );
}
