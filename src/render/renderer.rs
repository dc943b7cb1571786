use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, OrbitalKind, Position, Spin, Tone};
use crate::metrics::GameMetrics;

const ORBITAL_CORRECT: Color = Color::Cyan;
const ORBITAL_DECOY: Color = Color::Rgb(255, 165, 0);
const ELECTRON_UP: Color = Color::Red;
const ELECTRON_DOWN: Color = Color::Blue;
const PANEL_WIDTH: u16 = 34;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        // Two terminal columns per cell, plus the border
        let grid_width = u16::try_from(state.grid_width * 2 + 2).unwrap_or(u16::MAX);
        let grid_height = u16::try_from(state.grid_height + 2).unwrap_or(u16::MAX);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(grid_width), Constraint::Length(PANEL_WIDTH)])
            .split(frame.area());
        let game_area = Rect {
            height: grid_height.min(columns[0].height),
            ..columns[0]
        };

        frame.render_widget(self.render_grid(state), game_area);
        frame.render_widget(self.render_panel(state, metrics), columns[1]);

        if !state.is_alive() {
            let overlay = centered(game_area, 36, 9);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(state), overlay);
        }
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..state.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width)
                    .map(|x| cell_span(state, Position::new(x as i32, y as i32)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Orbital Snake "),
        )
    }

    fn render_panel(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let objective = Style::default().fg(ORBITAL_CORRECT);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(state.progress.score.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Orbitals Eaten: ", label),
                Span::styled(state.progress.orbitals_eaten.to_string(), value),
            ]),
            Line::from(""),
            Line::from(Span::styled("Objective:", label)),
        ];

        if let Some(fill) = state.fill() {
            lines.push(Line::from(Span::styled(format!("  Fill {}", fill.active), objective)));
            lines.push(Line::from(Span::styled(
                format!("  {}", slot_row(Spin::Up, fill.filled_up, fill.max_up)),
                Style::default().fg(ELECTRON_UP),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", slot_row(Spin::Down, fill.filled_down, fill.max_down)),
                Style::default().fg(ELECTRON_DOWN),
            )));
        } else if let Some(target) = state.progress.target() {
            lines.push(Line::from(Span::styled(format!("  Find {target}"), objective)));
        } else {
            lines.push(Line::from(Span::styled("  All orbitals filled", objective)));
        }

        lines.push(Line::from(""));
        match &state.flash {
            Some(flash) => {
                let color = match flash.tone {
                    Tone::Reward => Color::Green,
                    Tone::Penalty => Color::Red,
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        flash.text.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {}", "▮".repeat(flash.remaining_ticks as usize)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            None => lines.push(Line::from("")),
        }

        let best = metrics
            .best_score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        lines.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("Time: ", label),
                Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Best: ", label),
                Span::styled(best, Style::default().fg(Color::White)),
                Span::styled("  Games: ", label),
                Span::styled(metrics.games_played.to_string(), Style::default().fg(Color::White)),
                Span::styled("  Wins: ", label),
                Span::styled(metrics.games_won.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Controls:", label)),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move"),
            ]),
            Line::from(vec![
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ]);

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let (title, color) = if state.progress.win {
            ("YOU WIN! Electron Master!", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.progress.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
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
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
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
                .border_style(Style::default().fg(color)),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-column glyph for one grid cell
fn cell_span(state: &GameState, pos: Position) -> Span<'static> {
    if pos == state.snake.head() {
        return Span::styled(
            "■ ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );
    }
    if state.snake.occupies(pos) {
        return Span::styled("□ ", Style::default().fg(Color::Green));
    }
    if let Some(orbital) = state.orbitals().iter().find(|o| o.position == pos) {
        let background = match orbital.kind {
            OrbitalKind::Correct => ORBITAL_CORRECT,
            OrbitalKind::Decoy => ORBITAL_DECOY,
        };
        return Span::styled(
            orbital.label.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        );
    }
    if let Some(electron) = state.electrons.iter().find(|e| e.position == pos) {
        let background = match electron.spin {
            Spin::Up => ELECTRON_UP,
            Spin::Down => ELECTRON_DOWN,
        };
        return Span::styled(
            format!("{} ", electron.spin.arrow()),
            Style::default().fg(Color::White).bg(background),
        );
    }

    Span::styled(". ", Style::default().fg(Color::DarkGray))
}

/// Slot visualisation such as "↑ ↑ · " for two of three up slots taken
pub fn slot_row(spin: Spin, filled: u8, max: u8) -> String {
    let empty = max.saturating_sub(filled) as usize;
    format!("{} ", spin.arrow()).repeat(filled as usize) + &"· ".repeat(empty)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::MAX_GRID_SIDE;
    use crate::game::{FillState, GameConfig, GameEngine, OrbitalLabel, Phase};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &GameState) -> String {
        draw_sized(state, 90, 30)
    }

    fn draw_sized(state: &GameState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, state, &metrics))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn new_state() -> GameState {
        GameEngine::new(GameConfig::default().with_seed(3))
            .reset()
            .unwrap()
    }

    #[test]
    fn test_slot_row() {
        assert_eq!(slot_row(Spin::Up, 2, 3), "↑ ↑ · ");
        assert_eq!(slot_row(Spin::Down, 0, 1), "· ");
        assert_eq!(slot_row(Spin::Down, 1, 1), "↓ ");
    }

    #[test]
    fn test_seeking_panel() {
        let screen = draw(&new_state());
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("Find 1s"));
        assert!(screen.contains("1s"));
    }

    #[test]
    fn test_filling_panel() {
        let mut state = new_state();
        let mut fill = FillState::new(OrbitalLabel::parse("2p").unwrap());
        fill.filled_up = 2;
        state.phase = Phase::Filling(fill);

        let screen = draw(&state);
        assert!(screen.contains("Fill 2p"));
        assert!(screen.contains("↑ ↑ · "));
        assert!(screen.contains("· · · "));
    }

    #[test]
    fn test_widest_grid_draws() {
        let config = GameConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).with_seed(3);
        assert!(config.validate().is_ok());
        let state = GameEngine::new(config).reset().unwrap();

        // 100 cells take 202 columns next to the 34-column panel
        let screen = draw_sized(&state, 240, 110);
        assert!(screen.contains("■ "));
        assert!(screen.contains("Score: 0"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = new_state();
        state.progress.game_over = true;
        assert!(draw(&state).contains("GAME OVER"));

        state.progress.win = true;
        assert!(draw(&state).contains("YOU WIN! Electron Master!"));
    }
}
