//! Game View Model
//!
//! Derives everything the game view draws from the app state: input
//! display text, attempt counter and gauge ratio, message styling, and
//! the key hints for the current phase.

use guess_core::{parse_guess, GameState, MAX_ATTEMPTS};

/// How the feedback message should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Nothing to show yet
    None,
    /// Comparative feedback (too low / too high)
    Info,
    /// Invalid input feedback
    Warning,
    /// The game was won
    Win,
    /// The attempt budget ran out
    Loss,
}

/// Ready-to-render data for the game screen
#[derive(Debug, Clone)]
pub struct GameViewModel {
    /// Guess text plus a cursor block while input is accepted
    pub input_display: String,
    pub input_locked: bool,
    pub message: String,
    pub message_kind: MessageKind,
    /// "Attempts: n/10"
    pub attempts_label: String,
    /// Fraction of the attempt budget spent, for the gauge
    pub budget_ratio: f64,
    /// Key hints for the current phase
    pub hints: String,
}

impl GameViewModel {
    pub fn from_state(game: &GameState) -> Self {
        let input_locked = game.input_locked();

        let input_display = if input_locked {
            game.guess.clone()
        } else {
            format!("{}\u{2588}", game.guess)
        };

        let hints = if input_locked {
            "n: new game  Esc: quit".to_string()
        } else {
            "Enter: guess  Ctrl+N: new game  Esc: quit".to_string()
        };

        Self {
            input_display,
            input_locked,
            message: game.message.clone(),
            message_kind: classify_message(game),
            attempts_label: format!("Attempts: {}/{}", game.attempts, MAX_ATTEMPTS),
            budget_ratio: f64::from(game.attempts.min(MAX_ATTEMPTS)) / f64::from(MAX_ATTEMPTS),
            hints,
        }
    }
}

fn classify_message(game: &GameState) -> MessageKind {
    if game.message.is_empty() {
        return MessageKind::None;
    }
    if game.game_over {
        // Won iff the last submitted guess parsed to the target.
        let won = parse_guess(&game.guess).ok() == Some(game.target_number);
        if won {
            MessageKind::Win
        } else {
            MessageKind::Loss
        }
    } else if parse_guess(&game.guess).is_err() {
        MessageKind::Warning
    } else {
        MessageKind::Info
    }
}
