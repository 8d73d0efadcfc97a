//! Game configuration
//!
//! Built from command-line flags. Nothing is read from or written to disk.

use crate::core::{DEFAULT_MAX_TRIES, GameState, TargetWord, WordError};

/// Settings for one run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Word supplied up front; when absent the player is asked for one
    pub word: Option<String>,
    /// Wrong guesses allowed per game
    pub max_tries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word: None,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word: Option<String>, max_tries: u32) -> Self {
        Self { word, max_tries }
    }

    /// Start a game for `target` with the configured try limit
    #[must_use]
    pub fn start(&self, target: TargetWord) -> GameState {
        GameState::new(target, self.max_tries)
    }

    /// Validate the preset word, if any
    ///
    /// # Errors
    /// Returns `WordError` if a preset word is present but unusable.
    pub fn preset_target(&self) -> Result<Option<TargetWord>, WordError> {
        self.word.as_deref().map(TargetWord::new).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.word, None);
        assert_eq!(config.max_tries, 6);
        assert_eq!(config.preset_target(), Ok(None));
    }

    #[test]
    fn start_uses_try_limit() {
        let config = GameConfig::new(None, 9);
        let state = config.start(TargetWord::new("cat").unwrap());
        assert_eq!(state.tries_remaining(), 9);
    }

    #[test]
    fn preset_target_validated() {
        let config = GameConfig::new(Some("Ferris".to_string()), 6);
        assert_eq!(config.preset_target().unwrap().unwrap().text(), "ferris");

        let config = GameConfig::new(Some("  ".to_string()), 6);
        assert_eq!(config.preset_target(), Err(WordError::Empty));
    }
}
