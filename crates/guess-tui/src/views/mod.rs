//! Views - dumb layout code over resolved view models

mod game_view;

use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Render the application (a single game screen)
pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    game_view::render(state, area, frame);
}
