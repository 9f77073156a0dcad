pub mod cli;
pub mod config;
pub mod core;
pub mod exit;
pub mod extract;
pub mod render;
pub mod ui;
