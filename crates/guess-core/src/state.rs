//! Game State

use std::ops::Range;

use rand::Rng;

/// Attempt budget per game
pub const MAX_ATTEMPTS: u32 = 10;

/// Range the hidden target is drawn from (half-open)
pub const TARGET_RANGE: Range<i64> = 0..100;

/// State of one game, replaced wholesale on every reducer transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Hidden answer, fixed for the life of one game
    pub target_number: i64,
    /// Raw current input text, unvalidated
    pub guess: String,
    /// Last feedback text shown to the player
    pub message: String,
    /// Submitted guesses so far
    pub attempts: u32,
    /// True once won or the attempt budget is exhausted
    pub game_over: bool,
}

impl GameState {
    /// Start a fresh game with a randomly drawn target
    pub fn new() -> Self {
        Self::with_target(rand::rng().random_range(TARGET_RANGE))
    }

    /// Start a fresh game with a known target (deterministic hosts, tests)
    pub fn with_target(target_number: i64) -> Self {
        Self {
            target_number,
            guess: String::new(),
            message: String::new(),
            attempts: 0,
            game_over: false,
        }
    }

    /// Whether the host should stop accepting guess input
    pub fn input_locked(&self) -> bool {
        self.game_over || self.attempts >= MAX_ATTEMPTS
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
