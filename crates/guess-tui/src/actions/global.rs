//! Global actions - application-wide, no translation needed

use ratatui::crossterm::event::KeyEvent;

/// Application-wide actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key event from the terminal, consumed by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Stop the main loop and exit
    Quit,
}
