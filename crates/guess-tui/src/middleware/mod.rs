//! Middleware chain
//!
//! Middleware observe actions before the reducer. Returning `false`
//! consumes the action; returning `true` passes it along.

pub mod keyboard;
pub mod logging;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action. Return `true` to pass it on, `false` to consume it.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
