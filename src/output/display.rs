//! Display functions for the line-oriented game

use super::formatters::{gallows, letter_list, spaced, tries_bar};
use crate::core::{GameState, GuessResult, Letter, LetterError, TurnView};
use crate::session::SessionOutcome;
use colored::Colorize;
use std::io::{self, Write};

/// Message printed when the word to guess is missing or unusable
pub const INVALID_TARGET_MESSAGE: &str = "Invalid input. Exiting...";

/// Message printed when a turn's input is not a single letter
pub const INVALID_LETTER_MESSAGE: &str = "Please enter a valid letter.";

pub const WIN_MESSAGE: &str = "Congratulations! You've guessed the word.";
pub const LOSS_MESSAGE: &str = "Game Over! You've run out of tries.";
pub const ABANDON_MESSAGE: &str = "Input ended before the word was guessed. Game over.";

const BAR_WIDTH: usize = 12;

/// Print the banner and ask for the word to guess
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_welcome<W: Write>(out: &mut W, ask_for_word: bool) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to Hangman!".bright_cyan().bold())?;
    if ask_for_word {
        write!(out, "Enter the word to guess: ")?;
    }
    out.flush()
}

/// Print the per-turn board and the letter prompt
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_turn<W: Write>(out: &mut W, view: &TurnView) -> io::Result<()> {
    for line in gallows(view.tries_remaining, view.max_tries) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Remaining Tries: {} [{}]",
        view.tries_remaining.to_string().bright_yellow().bold(),
        tries_bar(view.tries_remaining, view.max_tries, BAR_WIDTH).green()
    )?;
    writeln!(out, "{}", spaced(&view.masked).bright_white().bold())?;
    writeln!(
        out,
        "Incorrect guesses: {}",
        letter_list(&view.wrong_guesses).red()
    )?;
    write!(out, "Enter a letter: ")?;
    out.flush()
}

/// Print a notice for input that was not a single letter
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_rejected<W: Write>(out: &mut W, error: &LetterError) -> io::Result<()> {
    writeln!(out, "{} ({error})", INVALID_LETTER_MESSAGE.red())
}

/// Print feedback for an accepted guess
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_guess_feedback<W: Write>(
    out: &mut W,
    letter: Letter,
    result: GuessResult,
) -> io::Result<()> {
    match result {
        GuessResult::Correct => writeln!(out, "{}", format!("Yes! '{letter}' is in the word.").green()),
        GuessResult::Wrong => writeln!(out, "{}", format!("No '{letter}' in the word.").red()),
        GuessResult::Repeated => writeln!(
            out,
            "{}",
            format!("You already guessed '{letter}'.").yellow()
        ),
        GuessResult::GameOver => Ok(()),
    }
}

/// Print the revealed word and the closing message
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_final<W: Write>(
    out: &mut W,
    state: &GameState,
    outcome: SessionOutcome,
) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows(state.tries_remaining(), state.max_tries()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", spaced(state.target().text()).bright_white().bold())?;

    match outcome {
        SessionOutcome::Won => writeln!(out, "{}", WIN_MESSAGE.green().bold())?,
        SessionOutcome::Lost => writeln!(out, "{}", LOSS_MESSAGE.red().bold())?,
        SessionOutcome::Abandoned => writeln!(out, "{}", ABANDON_MESSAGE.yellow().bold())?,
    }

    if !state.wrong_guesses().is_empty() {
        writeln!(
            out,
            "Incorrect guesses: {}",
            letter_list(state.wrong_guesses())
        )?;
    }
    out.flush()
}

/// Print the fatal message for an unusable word
///
/// # Errors
/// Returns an I/O error if output cannot be written.
pub fn print_invalid_target<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", INVALID_TARGET_MESSAGE.red())?;
    out.flush()
}
