pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod shell;
pub mod system;
pub mod ui;
pub mod utils;
