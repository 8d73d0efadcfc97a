//! Core domain types for hangman
//!
//! This module contains the game model and its transition rules.
//! All types here are pure and perform no I/O.

mod game;
mod letter;
mod word;

pub use game::{DEFAULT_MAX_TRIES, GameState, GuessResult, MASK_CHAR, Outcome, TurnView};
pub use letter::{Letter, LetterError};
pub use word::{TargetWord, WordError};
