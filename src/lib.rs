pub mod cli;
pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod parser;
pub mod progress;
pub mod questions;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
