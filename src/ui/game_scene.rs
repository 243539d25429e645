//! UI rendering for the Wirebug play field.

use crate::constants::{INFO_PANEL_WIDTH, PLAY_AREA_MIN_HEIGHT};
use crate::game::{Phase, WorldState};
use crate::ui::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_modal,
    render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Wire,
    Bird,
    /// Bird that already triggered the near-miss cue.
    AlertedBird,
    Bug,
}

impl Tile {
    fn span(self) -> Span<'static> {
        match self {
            Tile::Empty => Span::raw(" "),
            Tile::Wire => Span::styled("│", Style::default().fg(Color::DarkGray)),
            Tile::Bird => Span::styled("▓", Style::default().fg(Color::Red)),
            Tile::AlertedBird => Span::styled("▓", Style::default().fg(Color::LightRed)),
            Tile::Bug => Span::styled(
                "█",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }
}

/// Map a logical coordinate onto `cells` terminal cells.
pub fn to_cell(value: f64, logical_size: f64, cells: usize) -> usize {
    if cells == 0 || logical_size <= 0.0 {
        return 0;
    }
    let scaled = (value / logical_size * cells as f64).floor();
    (scaled.max(0.0) as usize).min(cells - 1)
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, world: &WorldState, best_score: u32) {
    let layout = create_game_layout(
        frame,
        area,
        " Wirebug ",
        Color::Cyan,
        PLAY_AREA_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_play_area(frame, layout.content, world);
    render_status_bar_content(frame, layout.status_bar, world);
    render_info_panel(frame, layout.info_panel, world, best_score);

    match world.phase {
        Phase::Ready => render_start_screen(frame, layout.content),
        Phase::GameOver => render_game_over_overlay(frame, area, world.score, best_score),
        Phase::Running | Phase::Paused => {}
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, world: &WorldState) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = &world.config;
    let mut grid = vec![vec![Tile::Empty; width]; height];

    for &wire_x in &config.wires {
        let col = to_cell(wire_x, config.field_width, width);
        for row in grid.iter_mut() {
            row[col] = Tile::Wire;
        }
    }

    for bird in &world.birds {
        let tile = if bird.alerted {
            Tile::AlertedBird
        } else {
            Tile::Bird
        };
        fill_box(
            &mut grid,
            world,
            (bird.x, bird.y),
            (config.bird_width, config.bird_height),
            tile,
        );
    }

    fill_box(
        &mut grid,
        world,
        (world.bug_x(), world.bug_y),
        (config.bug_width, config.bug_height),
        Tile::Bug,
    );

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(Tile::span).collect::<Vec<_>>()))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Paint a logical box onto the grid; always covers at least one cell.
fn fill_box(
    grid: &mut [Vec<Tile>],
    world: &WorldState,
    (x, y): (f64, f64),
    (w, h): (f64, f64),
    tile: Tile,
) {
    let config = &world.config;
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if width == 0 || height == 0 || y >= config.field_height || y + h <= 0.0 {
        return;
    }

    let left = to_cell(x, config.field_width, width);
    let right = to_cell(x + w, config.field_width, width).max(left + 1).min(width);
    let top = to_cell(y, config.field_height, height);
    let bottom = to_cell(y + h, config.field_height, height)
        .max(top + 1)
        .min(height);

    for row in &mut grid[top..bottom] {
        for cell in &mut row[left..right] {
            *cell = tile;
        }
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, world: &WorldState) {
    match world.phase {
        Phase::Ready => render_status_bar(
            frame,
            area,
            "Press Enter to start",
            Color::Yellow,
            &[("[Enter]", "Start"), ("[Q]", "Quit")],
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", world.score),
            Color::Green,
            &[("[←/→]", "Move"), ("[P]", "Pause"), ("[Q]", "Quit")],
        ),
        Phase::Paused => render_status_bar(
            frame,
            area,
            "PAUSED",
            Color::Yellow,
            &[("[P]", "Resume"), ("[Q]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            &format!("Final score: {}", world.score),
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, world: &WorldState, best_score: u32) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(world.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(best_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(format!("{:.2}", world.speed), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Wire:  ", label),
            Span::styled(
                format!("{}/{}", world.bug_wire + 1, world.config.wire_count()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Birds: ", label),
            Span::styled(world.birds.len().to_string(), Style::default().fg(Color::Red)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_start_screen(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "WIREBUG",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Hop between wires, dodge the birds."),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Start",
            Style::default().fg(Color::Yellow),
        )),
    ];
    render_modal(frame, area, Color::Green, lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(world: &WorldState, best: u32) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, world, best);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_to_cell_scaling() {
        assert_eq!(to_cell(0.0, 500.0, 50), 0);
        assert_eq!(to_cell(250.0, 500.0, 50), 25);
        assert_eq!(to_cell(500.0, 500.0, 50), 49);
        assert_eq!(to_cell(-30.0, 500.0, 50), 0);
        assert_eq!(to_cell(10.0, 500.0, 0), 0);
    }

    #[test]
    fn test_start_screen() {
        let world = WorldState::new(GameConfig::default());
        let text = screen_text(&world, 0);
        assert!(text.contains("WIREBUG"));
        assert!(text.contains("Press Enter to start"));
    }

    #[test]
    fn test_running_shows_score_and_bug() {
        let mut world = WorldState::new(GameConfig::default());
        world.reset();
        world.score = 7;
        world.push_bird(0);
        let text = screen_text(&world, 3);
        assert!(text.contains("Score: 7"));
        assert!(text.contains('█'));
        assert!(text.contains('▓'));
        assert!(text.contains('│'));
    }

    #[test]
    fn test_paused_banner() {
        let mut world = WorldState::new(GameConfig::default());
        world.reset();
        world.phase = Phase::Paused;
        assert!(screen_text(&world, 0).contains("PAUSED"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut world = WorldState::new(GameConfig::default());
        world.reset();
        world.score = 4;
        world.phase = Phase::GameOver;
        let text = screen_text(&world, 9);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Score: 4"));
        assert!(text.contains("Best: 9"));
        assert!(text.contains("Restart"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut world = WorldState::new(GameConfig::default());
        world.reset();
        world.push_bird(3);
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &world, 0);
            })
            .unwrap();
    }
}
