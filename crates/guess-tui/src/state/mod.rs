//! Application State Module

mod app;

pub use app::AppState;
