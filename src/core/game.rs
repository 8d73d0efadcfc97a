//! Hangman game state and transition rules
//!
//! `GameState` holds everything about one game: the target word, the letters
//! guessed so far (split into correct and wrong), and the tries left.
//! Transitions are pure; nothing here performs I/O.

use super::{Letter, TargetWord};
use rustc_hash::FxHashSet;

/// Number of wrong guesses allowed when no other limit is configured
pub const DEFAULT_MAX_TRIES: u32 = 6;

/// Placeholder shown for letters that have not been revealed
pub const MASK_CHAR: char = '_';

/// What a single guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter occurs in the target and was revealed
    Correct,
    /// Letter does not occur in the target; one try was spent
    Wrong,
    /// Letter had already been guessed; nothing changed
    Repeated,
    /// Game had already ended; nothing changed
    GameOver,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Everything a front end needs to draw one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub tries_remaining: u32,
    pub max_tries: u32,
    pub masked: String,
    pub wrong_guesses: Vec<Letter>,
}

/// State of a single hangman game
///
/// Invariants:
/// - `correct` and `wrong` are disjoint
/// - `tries_remaining` never increases and never drops below zero
/// - every guessed letter is recorded exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: TargetWord,
    correct: FxHashSet<Letter>,
    // Kept in guess order for display
    wrong: Vec<Letter>,
    tries_remaining: u32,
    max_tries: u32,
}

impl GameState {
    /// Start a new game
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, Outcome, TargetWord, DEFAULT_MAX_TRIES};
    ///
    /// let state = GameState::new(TargetWord::new("cat").unwrap(), DEFAULT_MAX_TRIES);
    /// assert_eq!(state.tries_remaining(), 6);
    /// assert_eq!(state.outcome(), Outcome::InProgress);
    /// assert_eq!(state.render_masked(), "___");
    /// ```
    #[must_use]
    pub fn new(target: TargetWord, max_tries: u32) -> Self {
        Self {
            target,
            correct: FxHashSet::default(),
            wrong: Vec::new(),
            tries_remaining: max_tries,
            max_tries,
        }
    }

    /// Apply one guess
    ///
    /// Repeated letters and guesses on a finished game leave the state unchanged,
    /// so a wrong letter is only ever charged once.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessResult, Letter, TargetWord};
    ///
    /// let mut state = GameState::new(TargetWord::new("cat").unwrap(), 2);
    /// let x = Letter::new('x').unwrap();
    ///
    /// assert_eq!(state.guess_letter(x), GuessResult::Wrong);
    /// assert_eq!(state.guess_letter(x), GuessResult::Repeated);
    /// assert_eq!(state.tries_remaining(), 1);
    /// ```
    pub fn guess_letter(&mut self, letter: Letter) -> GuessResult {
        if self.is_game_over() {
            return GuessResult::GameOver;
        }

        if self.has_guessed(letter) {
            return GuessResult::Repeated;
        }

        if self.target.contains(letter) {
            self.correct.insert(letter);
            GuessResult::Correct
        } else {
            self.wrong.push(letter);
            self.tries_remaining = self.tries_remaining.saturating_sub(1);
            GuessResult::Wrong
        }
    }

    /// By-value form of [`GameState::guess_letter`]
    #[must_use]
    pub fn guessed(mut self, letter: Letter) -> Self {
        self.guess_letter(letter);
        self
    }

    /// True when every letter of the target has been revealed
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.target
            .letters()
            .iter()
            .all(|letter| self.correct.contains(letter))
    }

    /// True when the game is won or out of tries
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.tries_remaining == 0 || self.is_word_guessed()
    }

    /// Classify the current state
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_word_guessed() {
            Outcome::Won
        } else if self.tries_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Target word with unrevealed letters replaced by [`MASK_CHAR`]
    #[must_use]
    pub fn render_masked(&self) -> String {
        self.target
            .letters()
            .iter()
            .map(|&letter| {
                if self.correct.contains(&letter) {
                    letter.as_char()
                } else {
                    MASK_CHAR
                }
            })
            .collect()
    }

    /// Snapshot of what the player should see this turn
    #[must_use]
    pub fn view(&self) -> TurnView {
        TurnView {
            tries_remaining: self.tries_remaining,
            max_tries: self.max_tries,
            masked: self.render_masked(),
            wrong_guesses: self.wrong.clone(),
        }
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Correctly guessed letters, sorted
    #[must_use]
    pub fn correct_guesses(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.correct.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Wrong guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> &[Letter] {
        &self.wrong
    }
}
