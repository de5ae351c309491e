pub mod app;
pub mod spotify;
pub mod ui;
