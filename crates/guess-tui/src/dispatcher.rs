//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to emit semantic actions in response to the one
//! it is handling, it uses the Dispatcher. Dispatched actions re-enter
//! the middleware chain from the beginning, so every middleware can
//! observe and react to them.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher over the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing through the full middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
