//! Reducer - pure function that produces the next game state from the
//! current state plus an action. Total over its input domain: every
//! reachable (state, action) pair returns a state, never panics.

use crate::action::GameAction;
use crate::parse::parse_guess;
use crate::state::{GameState, MAX_ATTEMPTS};

/// Apply one action to the game state
pub fn reduce(state: GameState, action: &GameAction) -> GameState {
    match action {
        GameAction::SetGuess(text) => GameState {
            guess: text.clone(),
            ..state
        },
        GameAction::SubmitGuess => submit_guess(state),
        GameAction::NewGame => GameState::new(),
    }
}

fn submit_guess(state: GameState) -> GameState {
    if state.game_over || state.attempts >= MAX_ATTEMPTS {
        return state;
    }

    let (mut message, mut game_over) = match parse_guess(&state.guess) {
        Err(_) => ("Please enter a valid number.".to_string(), false),
        Ok(n) if n == state.target_number => {
            let accuracy = accuracy(state.attempts);
            (
                format!(
                    "Correct! The number was {}. Accuracy: {}%.",
                    state.target_number, accuracy
                ),
                true,
            )
        }
        Ok(n) if n < state.target_number => ("Too low.".to_string(), false),
        Ok(_) => ("Too high.".to_string(), false),
    };

    // Every submission spends an attempt, invalid input included.
    let attempts = state.attempts + 1;
    if attempts >= MAX_ATTEMPTS && !game_over {
        message = format!("Max attempts reached. The number was {}.", state.target_number);
        game_over = true;
    }

    GameState {
        message,
        attempts,
        game_over,
        ..state
    }
}

/// Score for a winning guess: 100 minus 10 per prior attempt
fn accuracy(attempts_before: u32) -> i64 {
    100 - 10 * i64::from(attempts_before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TARGET_RANGE;

    fn submit(state: GameState, guess: &str) -> GameState {
        let state = reduce(state, &GameAction::SetGuess(guess.to_string()));
        reduce(state, &GameAction::SubmitGuess)
    }

    #[test]
    fn test_set_guess_replaces_only_guess() {
        let before = GameState::with_target(50);
        let after = reduce(before.clone(), &GameAction::SetGuess("30".to_string()));
        assert_eq!(after.guess, "30");
        assert_eq!(after.target_number, before.target_number);
        assert_eq!(after.message, before.message);
        assert_eq!(after.attempts, before.attempts);
        assert_eq!(after.game_over, before.game_over);
    }

    #[test]
    fn test_set_guess_keeps_raw_text() {
        let after = reduce(
            GameState::with_target(50),
            &GameAction::SetGuess("not a number".to_string()),
        );
        assert_eq!(after.guess, "not a number");
    }

    #[test]
    fn test_too_low_then_too_high() {
        let state = submit(GameState::with_target(50), "30");
        assert_eq!(state.message, "Too low.");
        assert_eq!(state.attempts, 1);
        assert!(!state.game_over);

        let state = submit(state, "70");
        assert_eq!(state.message, "Too high.");
        assert_eq!(state.attempts, 2);
        assert!(!state.game_over);
    }

    #[test]
    fn test_correct_first_try_full_accuracy() {
        let state = submit(GameState::with_target(50), "50");
        assert_eq!(state.message, "Correct! The number was 50. Accuracy: 100%.");
        assert_eq!(state.attempts, 1);
        assert!(state.game_over);
    }

    #[test]
    fn test_accuracy_drops_per_prior_attempt() {
        let mut state = GameState::with_target(50);
        state.attempts = 3;
        let state = submit(state, "50");
        assert_eq!(state.message, "Correct! The number was 50. Accuracy: 70%.");
        assert_eq!(state.attempts, 4);
        assert!(state.game_over);
    }

    #[test]
    fn test_submit_is_noop_when_game_over() {
        let mut state = GameState::with_target(50);
        state.game_over = true;
        state.guess = "50".to_string();
        state.message = "Correct! The number was 50. Accuracy: 100%.".to_string();
        state.attempts = 1;
        let after = reduce(state.clone(), &GameAction::SubmitGuess);
        assert_eq!(after, state);
    }

    #[test]
    fn test_submit_is_noop_when_budget_exhausted() {
        let mut state = GameState::with_target(50);
        state.attempts = MAX_ATTEMPTS;
        state.guess = "50".to_string();
        let after = reduce(state.clone(), &GameAction::SubmitGuess);
        assert_eq!(after, state);
    }

    #[test]
    fn test_wrong_final_attempt_ends_game() {
        let mut state = GameState::with_target(50);
        state.attempts = 9;
        let state = submit(state, "30");
        assert_eq!(state.attempts, 10);
        assert!(state.game_over);
        assert_eq!(state.message, "Max attempts reached. The number was 50.");
    }

    #[test]
    fn test_correct_final_attempt_still_wins() {
        // A win on the 10th submission is not overridden by the budget check.
        let mut state = GameState::with_target(50);
        state.attempts = 9;
        let state = submit(state, "50");
        assert_eq!(state.attempts, 10);
        assert!(state.game_over);
        assert_eq!(state.message, "Correct! The number was 50. Accuracy: 10%.");
    }

    #[test]
    fn test_invalid_input_spends_attempt() {
        let mut state = GameState::with_target(50);
        state.attempts = 3;
        let state = submit(state, "abc");
        assert_eq!(state.message, "Please enter a valid number.");
        assert_eq!(state.attempts, 4);
        assert!(!state.game_over);
    }

    #[test]
    fn test_invalid_input_on_last_attempt_ends_game() {
        let mut state = GameState::with_target(50);
        state.attempts = 9;
        let state = submit(state, "abc");
        assert_eq!(state.attempts, 10);
        assert!(state.game_over);
        assert_eq!(state.message, "Max attempts reached. The number was 50.");
    }

    #[test]
    fn test_strict_parse_rejects_mixed_string() {
        let state = submit(GameState::with_target(50), "50abc");
        assert_eq!(state.message, "Please enter a valid number.");
        assert!(!state.game_over);
    }

    #[test]
    fn test_negative_guess_compares_low() {
        let state = submit(GameState::with_target(50), "-5");
        assert_eq!(state.message, "Too low.");
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut state = GameState::with_target(50);
        state.guess = "99".to_string();
        state.message = "Too high.".to_string();
        state.attempts = 7;
        state.game_over = true;

        let fresh = reduce(state, &GameAction::NewGame);
        assert_eq!(fresh.guess, "");
        assert_eq!(fresh.message, "");
        assert_eq!(fresh.attempts, 0);
        assert!(!fresh.game_over);
        assert!(TARGET_RANGE.contains(&fresh.target_number));
    }

    #[test]
    fn test_full_game_to_win() {
        let mut state = GameState::with_target(37);
        for (guess, expected) in [("50", "Too high."), ("25", "Too low."), ("40", "Too high.")] {
            state = submit(state, guess);
            assert_eq!(state.message, expected);
            assert!(!state.game_over);
        }
        state = submit(state, "37");
        assert_eq!(state.message, "Correct! The number was 37. Accuracy: 70%.");
        assert_eq!(state.attempts, 4);
        assert!(state.game_over);
    }
}
