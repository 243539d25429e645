pub mod game_common;
pub mod game_scene;

use crate::game::WorldState;
use ratatui::Frame;

/// Draw one full frame of the game.
pub fn draw(frame: &mut Frame, world: &WorldState, best_score: u32) {
    let area = frame.size();
    game_scene::render_game(frame, area, world, best_score);
}
