//! Text input actions
//!
//! Generic editing vocabulary for the guess field. The root reducer
//! translates these into full set-guess payloads against the current
//! input text.

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into the input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear the entire input (Ctrl+U)
    ClearLine,
    /// Enter pressed - submit the guess
    Confirm,
}
