//! Root reducer - pure function that produces new app state from current
//! state + action. Global actions are handled here; game actions are
//! delegated to the core game reducer.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::state::AppState;
use guess_core::{GameAction, GameState};

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::KeyPressed(key)) => {
            // Raw key events are consumed by the keyboard middleware;
            // one reaching the reducer means no middleware claimed it.
            log::trace!("Unconsumed key event: {:?}", key);
        }
        Action::Game(game_action) => {
            state.game = guess_core::reduce(state.game, game_action);
        }
        Action::TextInput(input) => {
            if let Some(game_action) = translate_text_input(input, &state.game) {
                state.game = guess_core::reduce(state.game, &game_action);
            }
        }
    }

    state
}

/// Translate a generic editing action into a game action against the
/// current guess text. Editing is dropped while input is locked,
/// mirroring a disabled input field; Confirm always forwards (the game
/// reducer no-ops it once the game is over).
fn translate_text_input(input: &TextInputAction, game: &GameState) -> Option<GameAction> {
    match input {
        TextInputAction::Confirm => Some(GameAction::SubmitGuess),
        _ if game.input_locked() => None,
        TextInputAction::Char(c) => {
            let mut guess = game.guess.clone();
            guess.push(*c);
            Some(GameAction::SetGuess(guess))
        }
        TextInputAction::Backspace => {
            let mut guess = game.guess.clone();
            guess.pop();
            Some(GameAction::SetGuess(guess))
        }
        TextInputAction::ClearLine => Some(GameAction::SetGuess(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_target(target: i64) -> AppState {
        AppState {
            game: GameState::with_target(target),
            ..AppState::default()
        }
    }

    #[test]
    fn test_quit_clears_running() {
        let state = reduce(state_with_target(50), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_chars_append_to_guess() {
        let mut state = state_with_target(50);
        for c in ['4', '2'] {
            state = reduce(state, &Action::TextInput(TextInputAction::Char(c)));
        }
        assert_eq!(state.game.guess, "42");
    }

    #[test]
    fn test_backspace_pops_last_char() {
        let mut state = state_with_target(50);
        state.game.guess = "42".to_string();
        let state = reduce(state, &Action::TextInput(TextInputAction::Backspace));
        assert_eq!(state.game.guess, "4");
    }

    #[test]
    fn test_backspace_on_empty_guess_is_harmless() {
        let state = reduce(
            state_with_target(50),
            &Action::TextInput(TextInputAction::Backspace),
        );
        assert_eq!(state.game.guess, "");
    }

    #[test]
    fn test_clear_line_empties_guess() {
        let mut state = state_with_target(50);
        state.game.guess = "123".to_string();
        let state = reduce(state, &Action::TextInput(TextInputAction::ClearLine));
        assert_eq!(state.game.guess, "");
    }

    #[test]
    fn test_confirm_submits_guess() {
        let mut state = state_with_target(50);
        state.game.guess = "30".to_string();
        let state = reduce(state, &Action::TextInput(TextInputAction::Confirm));
        assert_eq!(state.game.message, "Too low.");
        assert_eq!(state.game.attempts, 1);
    }

    #[test]
    fn test_editing_dropped_while_locked() {
        let mut state = state_with_target(50);
        state.game.game_over = true;
        state.game.guess = "50".to_string();
        let state = reduce(state, &Action::TextInput(TextInputAction::Char('9')));
        assert_eq!(state.game.guess, "50");
    }

    #[test]
    fn test_confirm_after_game_over_is_noop() {
        let mut state = state_with_target(50);
        state.game.guess = "50".to_string();
        let state = reduce(state, &Action::TextInput(TextInputAction::Confirm));
        assert!(state.game.game_over);

        let before = state.game.clone();
        let state = reduce(state, &Action::TextInput(TextInputAction::Confirm));
        assert_eq!(state.game, before);
    }

    #[test]
    fn test_new_game_action_resets_game() {
        let mut state = state_with_target(50);
        state.game.attempts = 5;
        state.game.game_over = true;
        let state = reduce(state, &Action::Game(GameAction::NewGame));
        assert_eq!(state.game.attempts, 0);
        assert!(!state.game.game_over);
        assert!(state.running);
    }
}
