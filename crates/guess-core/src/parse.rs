//! Guess parsing policy
//!
//! Strict by decision: the guess must be a whole base-10 integer after
//! trimming surrounding whitespace. Mixed strings like `"50abc"` are
//! rejected rather than coerced to their leading numerals. Negative
//! input parses fine and simply compares low against the target.

use thiserror::Error;

/// Why a guess string failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessParseError {
    #[error("guess is empty")]
    Empty,
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),
}

/// Parse a raw guess string under the strict policy
pub fn parse_guess(raw: &str) -> Result<i64, GuessParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GuessParseError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| GuessParseError::NotAnInteger(trimmed.to_string()))
}
