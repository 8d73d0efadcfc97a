//! Hangman
//!
//! Guess a hidden word one letter at a time before running out of tries.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Letter, Outcome, TargetWord, DEFAULT_MAX_TRIES};
//!
//! let mut state = GameState::new(TargetWord::new("cat").unwrap(), DEFAULT_MAX_TRIES);
//!
//! for c in ['c', 'x', 'a', 't'] {
//!     state.guess_letter(Letter::new(c).unwrap());
//! }
//!
//! assert_eq!(state.outcome(), Outcome::Won);
//! assert_eq!(state.tries_remaining(), 5);
//! ```

// Core domain types
pub mod core;

// Game loop over abstract input and output
pub mod session;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
