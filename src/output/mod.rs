//! Terminal output formatting
//!
//! Display utilities for the line-oriented game and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::{print_final, print_invalid_target, print_turn, print_welcome};
