//! Command implementations

pub mod simple;

pub use simple::{ConsoleRenderer, LineSource, play_console, run_simple};
