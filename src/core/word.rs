//! Target word representation
//!
//! A `TargetWord` stores the hidden word lower-cased, along with its letters
//! for membership checks and masked rendering.

use super::Letter;
use std::fmt;
use thiserror::Error;

/// The word the player is trying to reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("the word to guess must not be empty")]
    Empty,
    #[error("the word to guess may only contain letters, found '{0}'")]
    InvalidCharacter(char),
}

impl TargetWord {
    /// Create a target word from raw input
    ///
    /// Surrounding whitespace is trimmed and the word is lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed word is empty
    /// - Any character is not alphabetic (such a letter could never be guessed)
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new(" Rustacean\n").unwrap();
    /// assert_eq!(word.text(), "rustacean");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("r2d2").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordError> {
        let text = raw.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(|c| Letter::new(c).map_err(|_| WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: an empty target is rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
