//! Game actions
//!
//! The closed set of transitions a host can dispatch into the reducer.

/// Actions accepted by [`reduce`](crate::reduce)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Replace the raw guess text with the payload (no validation yet)
    SetGuess(String),
    /// Evaluate the current guess text against the target
    SubmitGuess,
    /// Abandon the current game and draw a fresh target
    NewGame,
}
