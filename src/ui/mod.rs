//! Terminal presentation adapter.

pub mod game_common;
pub mod seagull_scene;

use crate::sim::{Scenery, Session};
use ratatui::{layout::Rect, Frame};

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, session: &Session, scenery: &Scenery) {
    let size = frame.size();
    seagull_scene::render_seagull(frame, size, session, scenery);
}

/// Play-field rectangle for a terminal area. The logical screen is sized
/// from this so that one logical pixel grid maps evenly onto cells.
pub fn play_area_for(area: Rect) -> Rect {
    game_common::split_game_area(area).content
}
