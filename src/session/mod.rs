//! Game loop shared by the line-oriented front end
//!
//! The loop knows nothing about terminals. It talks to the outside world through
//! two capabilities: a [`LetterSource`] that yields raw lines of input and a
//! [`Renderer`] that shows the state back to the player.

mod runner;

pub use runner::{SessionReport, read_target, run_session};

use crate::core::{GameState, GuessResult, Letter, LetterError, TurnView, WordError};
use std::io;
use thiserror::Error;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Input ran out before the game was decided
    Abandoned,
}

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("no word was entered")]
    MissingTarget,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Source of raw player input, one line at a time
pub trait LetterSource {
    /// Read the next line, or `None` once input is exhausted
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Presentation side of the game loop
pub trait Renderer {
    /// Show the state before asking for a letter
    ///
    /// # Errors
    /// Returns an I/O error if output cannot be written.
    fn render_turn(&mut self, view: &TurnView) -> io::Result<()>;

    /// Tell the player their input was not a single letter
    ///
    /// # Errors
    /// Returns an I/O error if output cannot be written.
    fn reject_input(&mut self, error: &LetterError) -> io::Result<()>;

    /// Acknowledge an accepted guess
    ///
    /// # Errors
    /// Returns an I/O error if output cannot be written.
    fn report_guess(&mut self, letter: Letter, result: GuessResult) -> io::Result<()>;

    /// Show the final board and the win, loss or abandon message
    ///
    /// # Errors
    /// Returns an I/O error if output cannot be written.
    fn render_final(&mut self, state: &GameState, outcome: SessionOutcome) -> io::Result<()>;
}
