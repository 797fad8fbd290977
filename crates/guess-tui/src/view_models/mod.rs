//! View models - resolve state into ready-to-render data so the views
//! stay dumb layout code.

mod game_view_model;

pub use game_view_model::{GameViewModel, MessageKind};
