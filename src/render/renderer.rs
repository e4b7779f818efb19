use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::canvas::PixelCanvas;
use crate::game::{Cell, GameError, Paint, Territory};
use crate::metrics::GameMetrics;

/// Terminal color used for each paint
pub fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Head => Color::Blue,
        Paint::Ground => Color::LightGreen,
        Paint::Food => Color::Red,
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame. `game_over` is set once the session has ended.
    pub fn render(
        &self,
        frame: &mut Frame,
        territory: &Territory<PixelCanvas>,
        metrics: &GameMetrics,
        game_over: Option<&GameError>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(territory, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match game_over {
            None => frame.render_widget(self.render_grid(territory), game_area),
            Some(reason) => {
                frame.render_widget(self.render_game_over(territory, metrics, reason), game_area)
            }
        }

        let controls = self.render_controls(game_over.is_some());
        frame.render_widget(controls, chunks[2]);
    }

    /// One text cell per grid cell, colored by what the canvas holds at the
    /// cell's top-left pixel
    fn render_grid(&self, territory: &Territory<PixelCanvas>) -> Paragraph<'_> {
        let grid = territory.grid();
        let cell_size = territory.cell_size();
        let canvas = territory.surface();
        let head = territory.snake().head();

        let mut lines = Vec::with_capacity(grid.height as usize);

        for row in 0..grid.height {
            let mut spans = Vec::with_capacity(grid.width as usize);

            for col in 0..grid.width {
                let cell = Cell::new(row, col);
                let paint = canvas
                    .pixel(cell.to_point(cell_size))
                    .unwrap_or(Paint::Ground);
                let style = Style::default().fg(paint_color(paint));

                let span = match paint {
                    Paint::Head if cell == head => {
                        Span::styled("■ ", style.add_modifier(Modifier::BOLD))
                    }
                    Paint::Head => Span::styled("□ ", style),
                    Paint::Food => Span::styled("● ", style.add_modifier(Modifier::BOLD)),
                    Paint::Ground => Span::styled("· ", style),
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        territory: &Territory<PixelCanvas>,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                territory.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.format_time(territory.config().tick_interval()),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        territory: &Territory<PixelCanvas>,
        metrics: &GameMetrics,
        reason: &GameError,
    ) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(
                reason.to_string(),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    territory.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, game_over: bool) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if game_over {
            spans.push(Span::styled("R", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" to play | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
