pub mod api;
pub mod app;
pub mod board;
pub mod render;
pub mod ui;
pub mod utils;
