//! Core rules for the number-guessing game.
//!
//! The entire game is a pure state machine: [`reduce`] maps a
//! ([`GameState`], [`GameAction`]) pair to the next state. No I/O, no
//! hidden state - hosts own the state value, dispatch actions into the
//! reducer, and render whatever comes back.

mod action;
mod parse;
mod reducer;
mod state;

pub use action::GameAction;
pub use parse::{parse_guess, GuessParseError};
pub use reducer::reduce;
pub use state::{GameState, MAX_ATTEMPTS, TARGET_RANGE};
