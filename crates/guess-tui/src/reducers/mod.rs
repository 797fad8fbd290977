pub mod app_reducer;
