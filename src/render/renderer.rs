use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashSet;

use super::palette::Palette;
use crate::game::{GameConfig, GameStatus, Position, Snapshot};
use crate::metrics::SessionStats;

/// Draws snapshots; one board cell is two terminal columns wide
pub struct Renderer {
    config: GameConfig,
    palette: Palette,
}

impl Renderer {
    pub fn new(config: GameConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, stats: &SessionStats) {
        let background = Block::default().style(Style::default().bg(self.palette.background));
        frame.render_widget(background, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, stats), chunks[0]);

        let board_area = self.board_area(chunks[1]);
        match snapshot.status {
            GameStatus::Running => {
                frame.render_widget(self.render_board(snapshot, board_area), board_area)
            }
            GameStatus::Over => frame.render_widget(self.render_game_over(snapshot), board_area),
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Board rectangle centred in `area`, clipped when the terminal is small
    fn board_area(&self, area: Rect) -> Rect {
        let wanted_width = self.config.columns().saturating_mul(2).saturating_add(2);
        let wanted_height = self.config.rows().saturating_add(2);
        let width = wanted_width.min(u32::from(area.width)) as u16;
        let height = wanted_height.min(u32::from(area.height)) as u16;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Only the top-left cells that fit inside `area` are built
    fn render_board(&self, snapshot: &Snapshot, area: Rect) -> Paragraph<'_> {
        let body: HashSet<Position> = snapshot.body.iter().copied().collect();
        let head = snapshot.head();
        let rows = self.config.rows().min(u32::from(area.height.saturating_sub(2)));
        let columns = self
            .config
            .columns()
            .min(u32::from(area.width.saturating_sub(2) / 2));
        let mut lines = Vec::with_capacity(rows as usize);

        for row in 0..rows {
            let mut spans = Vec::with_capacity(columns as usize);

            for column in 0..columns {
                let pos = self.config.cell_origin(column, row);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(self.palette.snake_head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled("██", Style::default().fg(self.palette.snake))
                } else if pos == snapshot.food {
                    Span::styled("██", Style::default().fg(self.palette.food))
                } else {
                    Span::styled("· ", Style::default().fg(self.palette.grid))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(self.palette.border)),
        )
    }

    fn render_stats(&self, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'_> {
        let label = Style::default().fg(self.palette.label);
        let value = Style::default().fg(self.palette.text);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(stats.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(stats.format_elapsed(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let alert = Style::default()
            .fg(self.palette.alert)
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(self.palette.text);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled("GAME OVER!", alert)),
            Line::from(""),
            Line::from(Span::styled(format!("Score: {}", snapshot.score), alert)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", hint),
                Span::styled("R", alert),
                Span::styled(" to restart or ", hint),
                Span::styled("Q", alert),
                Span::styled(" to quit", hint),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.palette.alert)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = Style::default().fg(self.palette.label);

        let text = Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Q", key),
            Span::raw(" quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
