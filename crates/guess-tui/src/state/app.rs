//! Application State

use crate::theme::Theme;
use guess_core::GameState;

/// Application state - owned by the store, replaced on every dispatch
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub game: GameState,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            game: GameState::new(),
            theme: Theme::default(),
        }
    }
}
