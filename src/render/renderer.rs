use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use crate::game::{GameState, Phase};
use crate::metrics::GameMetrics;
use crate::render::layout::{tail_fragments, GridLayout};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_running() {
            self.render_board(frame, game_area, state);
        } else {
            let panel = self.render_session_end(state);
            frame.render_widget(panel, game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Draw head, tail and apple on a canvas whose units are grid cells.
    /// The tail is split into fragments wherever a wrap leaves consecutive
    /// cells non-adjacent, so no line streaks across the board.
    fn render_board(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let size = f64::from(state.grid_size);
        let layout = GridLayout::new(size, state.grid_size);

        // canvas y grows upward, grid y grows downward
        let flip = |(x, y): (f64, f64)| (x, size - y);

        let cells: Vec<_> = state.tail.iter().collect();
        let fragments = tail_fragments(&cells);
        let head = flip(layout.cell_center(state.head.cell));
        let apple = flip(layout.cell_center(state.apple));

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(|ctx| {
                for fragment in &fragments {
                    for pair in fragment.windows(2) {
                        let (x1, y1) = flip(layout.cell_center(pair[0]));
                        let (x2, y2) = flip(layout.cell_center(pair[1]));
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: Color::Yellow,
                        });
                    }
                    if fragment.len() == 1 {
                        let point = flip(layout.cell_center(fragment[0]));
                        ctx.draw(&Points {
                            coords: &[point],
                            color: Color::Yellow,
                        });
                    }
                }

                ctx.draw(&Points {
                    coords: &[head],
                    color: Color::LightYellow,
                });
                ctx.draw(&Points {
                    coords: &[apple],
                    color: Color::Green,
                });
            });

        frame.render_widget(canvas, area);
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_elapsed(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
    }

    fn render_session_end(&self, state: &GameState) -> Paragraph<'_> {
        let (title, color) = match state.phase {
            Phase::BoardFull => ("YOU WIN", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Final score: {}", state.score)),
            Line::from(""),
            Line::from(Span::styled(
                "press r to restart",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("arrows/wasd", Style::default().fg(Color::Cyan)),
            Span::raw(" steer    "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(" restart    "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
