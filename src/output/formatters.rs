//! Formatting utilities for terminal output

use crate::core::Letter;

/// Space out a masked word so blanks are easy to count
///
/// # Examples
/// ```
/// use hangman::output::formatters::spaced;
///
/// assert_eq!(spaced("c__"), "c _ _");
/// ```
#[must_use]
pub fn spaced(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Join guessed letters for display, in the order given
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a bar showing how many tries are left out of the maximum
#[must_use]
pub fn tries_bar(remaining: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let filled = (remaining as usize * width) / max as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pick the gallows drawing for the number of wrong guesses made
///
/// The figure is drawn in six stages; with a different try limit the stages
/// are spread proportionally.
#[must_use]
pub fn gallows(remaining: u32, max: u32) -> &'static [&'static str] {
    static STAGES: [[&str; 6]; 7] = [
        [" +---+", " |   |", "     |", "     |", "     |", "======"],
        [" +---+", " |   |", " O   |", "     |", "     |", "======"],
        [" +---+", " |   |", " O   |", " |   |", "     |", "======"],
        [" +---+", " |   |", " O   |", "/|   |", "     |", "======"],
        [" +---+", " |   |", " O   |", "/|\\  |", "     |", "======"],
        [" +---+", " |   |", " O   |", "/|\\  |", "/    |", "======"],
        [" +---+", " |   |", " O   |", "/|\\  |", "/ \\  |", "======"],
    ];

    let used = max.saturating_sub(remaining) as usize;
    let stage = if max == 0 {
        STAGES.len() - 1
    } else {
        (used * (STAGES.len() - 1)).div_ceil(max as usize)
    };

    &STAGES[stage.min(STAGES.len() - 1)]
}
