//! KeyboardMiddleware - converts raw keyboard events to semantic actions

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use guess_core::GameAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Handle a key event and dispatch semantic actions
fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        // Quit
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }

        // New game
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Game(GameAction::NewGame));
        }
        // Once the input field is locked, a plain 'n' is free for new-game
        KeyCode::Char('n') if key.modifiers == KeyModifiers::NONE && state.game.input_locked() => {
            dispatcher.dispatch(Action::Game(GameAction::NewGame));
        }

        // Guess editing
        KeyCode::Enter => {
            dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
        }
        KeyCode::Backspace => {
            dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
        }

        // Any other character key goes into the input field
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
        }

        // Unhandled keys
        _ => {
            log::trace!("Unhandled key: {:?}", key);
        }
    }
}
