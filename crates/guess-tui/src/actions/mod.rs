//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - Global actions (raw key events, quit)
//! - Generic text input actions the reducer translates against the
//!   current guess text
//! - Game actions, already targeted at the core game reducer

pub mod global;
pub mod text_input;

pub use global::GlobalAction;
pub use text_input::TextInputAction;

use guess_core::GameAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Application-wide actions (key events, quit)
    Global(GlobalAction),
    /// Generic text input actions - translated by the root reducer
    TextInput(TextInputAction),
    /// Game actions - forwarded to the core game reducer
    Game(GameAction),
}
