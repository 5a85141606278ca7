//! Seagull game UI rendering.
//!
//! Uses a cell buffer: sky, clouds, obstacles, pickups and the bird are
//! drawn into a 2D grid in logical-pixel space scaled to the play field,
//! then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_centered_panel, render_info_panel_frame, render_status_bar,
};
use crate::sim::{BoundingBox, Obstacle, Phase, Scenery, Session};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = " Stuey's Seagull Son ";

const SKY: Color = Color::Rgb(135, 206, 250);
const CLOUD: Color = Color::Rgb(235, 245, 255);
const PIPE_BODY: Color = Color::Rgb(10, 140, 60);
const PIPE_RIM: Color = Color::Rgb(0, 100, 40);
const BLOCK: Color = Color::Rgb(140, 90, 60);
const BONUS: Color = Color::Rgb(255, 215, 0);
const GULL_BODY: Color = Color::Rgb(230, 230, 230);
const GULL_BEAK: Color = Color::Rgb(255, 200, 0);

/// Render the whole game screen.
pub fn render_seagull(frame: &mut Frame, area: Rect, session: &Session, scenery: &Scenery) {
    let layout = create_game_layout(frame, area, TITLE, Color::Cyan);

    render_play_field(frame, layout.content, session, scenery);

    match session.phase {
        Phase::Start => render_start_panel(frame, layout.content, session),
        Phase::GameOver => render_game_over_panel(frame, layout.content, session),
        Phase::Playing => {}
    }

    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

/// Cell in the render buffer.
#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    fn sky() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: SKY,
        }
    }

    fn solid(ch: char, fg: Color) -> Self {
        Self { ch, fg, bg: SKY }
    }
}

/// Grid of cells plus the logical-pixel to cell scale.
struct CellBuffer {
    cells: Vec<Vec<Cell>>,
    cols: usize,
    rows: usize,
    x_scale: f64,
    y_scale: f64,
}

impl CellBuffer {
    fn new(area: Rect, world_width: f64, world_height: f64) -> Self {
        let cols = area.width as usize;
        let rows = area.height as usize;
        Self {
            cells: vec![vec![Cell::sky(); cols]; rows],
            cols,
            rows,
            x_scale: if world_width > 0.0 {
                cols as f64 / world_width
            } else {
                1.0
            },
            y_scale: if world_height > 0.0 {
                rows as f64 / world_height
            } else {
                1.0
            },
        }
    }

    /// Cell span covered by a logical box, clipped to the grid.
    /// Returns `(col_start, col_end, row_start, row_end)`, end exclusive.
    fn span(&self, rect: &BoundingBox) -> Option<(usize, usize, usize, usize)> {
        let c0 = (rect.left() * self.x_scale).floor().max(0.0);
        let c1 = (rect.right() * self.x_scale).ceil().min(self.cols as f64);
        let r0 = (rect.top() * self.y_scale).floor().max(0.0);
        let r1 = (rect.bottom() * self.y_scale).ceil().min(self.rows as f64);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some((c0 as usize, c1 as usize, r0 as usize, r1 as usize))
    }

    fn fill(&mut self, rect: &BoundingBox, cell: Cell) {
        if let Some((c0, c1, r0, r1)) = self.span(rect) {
            for row in &mut self.cells[r0..r1] {
                for slot in &mut row[c0..c1] {
                    *slot = cell;
                }
            }
        }
    }

    fn put(&mut self, x: f64, y: f64, cell: Cell) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let col = (x * self.x_scale) as usize;
        let row = (y * self.y_scale) as usize;
        if row < self.rows && col < self.cols {
            self.cells[row][col] = cell;
        }
    }

    /// Stamp the buffer into `area`, merging runs of identical style.
    fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Render the play field: sky, clouds, obstacles, pickups, bird.
fn render_play_field(frame: &mut Frame, area: Rect, session: &Session, scenery: &Scenery) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut buffer = CellBuffer::new(area, session.bounds.width, session.bounds.height);

    for cloud in scenery.clouds() {
        buffer.fill(
            &BoundingBox::new(
                cloud.x - cloud.size,
                cloud.y - cloud.size * 0.7,
                cloud.size * 2.0,
                cloud.size * 1.4,
            ),
            Cell::solid('░', CLOUD),
        );
    }

    // Obstacles and pickups only exist while playing
    for obstacle in &session.obstacles {
        draw_obstacle(&mut buffer, obstacle);
    }
    for power_up in &session.power_ups {
        buffer.fill(&power_up.rect(), Cell::solid('◆', BONUS));
    }

    if session.phase == Phase::Playing {
        draw_gull(&mut buffer, session);
    }

    buffer.render(frame, area);
}

fn draw_obstacle(buffer: &mut CellBuffer, obstacle: &Obstacle) {
    match obstacle {
        Obstacle::Gap(gap) => {
            let [top, bottom] = gap.regions();
            buffer.fill(&top, Cell::solid('█', PIPE_BODY));
            buffer.fill(&bottom, Cell::solid('█', PIPE_BODY));

            // Rims overhang the body by 5px each side
            let rim_h = 20.0_f64.min(top.h);
            buffer.fill(
                &BoundingBox::new(top.x - 5.0, top.bottom() - rim_h, top.w + 10.0, rim_h),
                Cell::solid('▄', PIPE_RIM),
            );
            let rim_h = 20.0_f64.min(bottom.h);
            buffer.fill(
                &BoundingBox::new(bottom.x - 5.0, bottom.y, bottom.w + 10.0, rim_h),
                Cell::solid('▀', PIPE_RIM),
            );
        }
        Obstacle::Ground(block) => {
            buffer.fill(&block.rect(), Cell::solid('▓', BLOCK));
        }
    }
}

fn draw_gull(buffer: &mut CellBuffer, session: &Session) {
    let player = &session.player;
    let body = player.bounding_box();
    // Wings up for the first half of every 20-frame cycle
    let wing = if (session.run_frames / 10) % 2 == 0 {
        '▀'
    } else {
        '▄'
    };
    buffer.fill(&body, Cell::solid(wing, GULL_BODY));

    let beak = if player.velocity < -2.0 {
        '▲'
    } else if player.velocity > 6.0 {
        '▼'
    } else {
        '►'
    };
    buffer.put(
        body.right() - 1.0,
        player.y,
        Cell {
            ch: beak,
            fg: GULL_BEAK,
            bg: SKY,
        },
    );
}

fn render_start_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let body = vec![
        Line::from(Span::styled(
            "Tap Space to start",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default().fg(Color::Cyan),
        )),
    ];
    render_centered_panel(frame, area, "Stuey's Seagull Son", Color::Yellow, &body);
}

fn render_game_over_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let body = vec![
        Line::from(Span::styled(
            format!("Score: {}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Tap Space to play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered_panel(frame, area, "GAME OVER", Color::Red, &body);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    match session.phase {
        Phase::Start => render_status_bar(
            frame,
            area,
            "Ready",
            Color::Yellow,
            &[("[Space/Click]", "Start"), ("[Q]", "Quit")],
        ),
        Phase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score),
            Color::White,
            &[("[Space/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            "Splat!",
            Color::Red,
            &[("[Space/Click]", "Retry"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);

    let speed_mode = if session.rules.speed_ramp {
        "ramp"
    } else {
        "fixed"
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.high_score.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2} ({})", session.difficulty_speed, speed_mode),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ► ", Style::default().fg(GULL_BEAK)),
            Span::styled("Seagull", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(PIPE_BODY)),
            Span::styled("Pipe", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    if session.rules.ground_obstacle_chance > 0.0 {
        lines.push(Line::from(vec![
            Span::styled(" ▓ ", Style::default().fg(BLOCK)),
            Span::styled("Chimney", Style::default().fg(Color::DarkGray)),
        ]));
    }
    if session.rules.power_ups {
        lines.push(Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(BONUS)),
            Span::styled(
                format!("Bonus +{}", session.rules.power_up_bonus),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Rules;
    use crate::sim::{Bounds, TickResult};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(session: &Session) -> String {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scenery = Scenery::new(session.bounds, &mut rng);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render_seagull(f, f.size(), session, &scenery))
            .unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_start_screen_shows_high_score() {
        let session = Session::new(Bounds::new(560.0, 400.0), Rules::classic(), 17);
        let text = draw(&session);
        assert!(text.contains("Seagull"));
        assert!(text.contains("High Score: 17"));
    }

    #[test]
    fn test_playing_screen_shows_score() {
        let mut session = Session::new(Bounds::new(560.0, 400.0), Rules::classic(), 0);
        session.reset(&mut TickResult::default());
        session.score = 6;
        let text = draw(&session);
        assert!(text.contains("Score: 6"));
        assert!(text.contains("Flap"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut session = Session::new(Bounds::new(560.0, 400.0), Rules::classic(), 3);
        session.phase = Phase::GameOver;
        let text = draw(&session);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("High Score: 3"));
    }

    #[test]
    fn test_legend_follows_rules() {
        let classic = draw(&Session::new(Bounds::new(560.0, 400.0), Rules::classic(), 0));
        assert!(classic.contains("Pipe"));
        assert!(!classic.contains("Chimney"));
        assert!(!classic.contains("Bonus +"));

        let arcade = draw(&Session::new(Bounds::new(560.0, 400.0), Rules::arcade(), 0));
        assert!(arcade.contains("Chimney"));
        assert!(arcade.contains("Bonus +5"));
    }

    #[test]
    fn test_span_clips_to_grid() {
        let buffer = CellBuffer::new(Rect::new(0, 0, 10, 5), 100.0, 50.0);
        assert_eq!(
            buffer.span(&BoundingBox::new(-20.0, -5.0, 40.0, 20.0)),
            Some((0, 2, 0, 2))
        );
        assert_eq!(buffer.span(&BoundingBox::new(200.0, 0.0, 10.0, 10.0)), None);
    }
}
