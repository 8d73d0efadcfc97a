//! Single-letter guesses
//!
//! A `Letter` is the only thing a player can guess. Construction validates and
//! lower-cases the character, so everything downstream compares normalized letters.

use std::fmt;
use thiserror::Error;

/// A single alphabetic character, normalized to lower case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("no letter entered")]
    Empty,
    #[error("enter exactly one letter, got {0} characters")]
    TooLong(usize),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

impl Letter {
    /// Create a letter from a single character
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` if `c` is not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if !c.is_alphabetic() {
            return Err(LetterError::NotALetter(c));
        }
        Ok(Self(c.to_lowercase().next().unwrap_or(c)))
    }

    /// Parse one line of player input into a letter
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// alphabetic character.
    ///
    /// # Errors
    /// Returns `LetterError` if the trimmed input is empty, longer than one
    /// character, or not alphabetic.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" A \n").unwrap().as_char(), 'a');
    /// assert!(Letter::parse("ab").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LetterError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(LetterError::TooLong(trimmed.chars().count())),
        }
    }

    /// Get the normalized character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
