//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{GameState, GuessResult, Letter, Outcome, TargetWord};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, info};

/// Application state
pub struct App {
    pub config: GameConfig,
    pub game: Option<GameState>,
    pub input_mode: InputMode,
    pub word_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Setter types the hidden word
    WordEntry,
    /// Player presses letter keys
    Guessing,
    /// Game decided; waiting for new game or quit
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Tally for the current run only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app, starting straight away if a word was supplied
    #[must_use]
    pub fn new(config: GameConfig, preset: Option<TargetWord>) -> Self {
        let mut app = Self {
            config,
            game: None,
            input_mode: InputMode::WordEntry,
            word_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        match preset {
            Some(target) => app.start_game(target),
            None => app.add_message(
                "Welcome! Enter the word to guess (hidden as you type).",
                MessageStyle::Info,
            ),
        }

        app
    }

    fn start_game(&mut self, target: TargetWord) {
        info!(length = target.len(), max_tries = self.config.max_tries, "starting game");
        self.game = Some(self.config.start(target));
        self.word_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("Game on! Press a letter key to guess.", MessageStyle::Info);
    }

    /// Validate the typed word and start a game with it
    pub fn submit_word(&mut self) {
        match TargetWord::new(&self.word_buffer) {
            Ok(target) => self.start_game(target),
            Err(err) => {
                debug!(%err, "rejected word");
                self.word_buffer.clear();
                self.add_message(&format!("Invalid word: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Apply a key press as a guess
    pub fn guess(&mut self, c: char) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let letter = match Letter::new(c) {
            Ok(letter) => letter,
            Err(err) => {
                self.add_message(&format!("Please enter a valid letter ({err})"), MessageStyle::Error);
                return;
            }
        };

        let result = game.guess_letter(letter);
        debug!(%letter, ?result, tries_remaining = game.tries_remaining(), "guess applied");

        match result {
            GuessResult::Correct => {
                self.add_message(&format!("Yes! '{letter}' is in the word."), MessageStyle::Success);
            }
            GuessResult::Wrong => {
                self.add_message(&format!("No '{letter}' in the word."), MessageStyle::Error);
            }
            GuessResult::Repeated => {
                self.add_message(&format!("You already guessed '{letter}'."), MessageStyle::Info);
            }
            GuessResult::GameOver => {}
        }

        self.check_finished();
    }

    fn check_finished(&mut self) {
        let Some(outcome) = self.game.as_ref().map(GameState::outcome) else {
            return;
        };

        match outcome {
            Outcome::InProgress => return,
            Outcome::Won => {
                self.stats.games_won += 1;
                self.add_message("Congratulations! You've guessed the word.", MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message("Game Over! You've run out of tries.", MessageStyle::Error);
            }
        }

        self.stats.total_games += 1;
        self.input_mode = InputMode::Finished;
        info!(?outcome, "game finished");
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = None;
        self.word_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::WordEntry;
        self.add_message(
            "New game! Enter the word to guess (hidden as you type).",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Outcome of the current game, if one is running or finished
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.game.as_ref().map(GameState::outcome)
    }

    /// Route one key press according to the input mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Control and Alt chords never type text
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match self.input_mode {
            InputMode::WordEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !chord => self.word_buffer.push(c),
                KeyCode::Backspace => {
                    self.word_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !chord => self.guess(c),
                _ => {}
            },
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Switch to the alternate screen; mouse reporting stays off so text selection works
fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            println!(
                "Played {} game(s), won {}.",
                app.stats.total_games, app.stats.games_won
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Err(err)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    if app.outcome() == Some(Outcome::InProgress) {
        info!("quit before the game was decided");
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with_word(word: &str, tries: u32) -> App {
        App::new(
            GameConfig::new(Some(word.to_string()), tries),
            Some(TargetWord::new(word).unwrap()),
        )
    }

    #[test]
    fn starts_in_word_entry_without_preset() {
        let app = App::new(GameConfig::default(), None);
        assert_eq!(app.input_mode, InputMode::WordEntry);
        assert!(app.game.is_none());
    }

    #[test]
    fn starts_guessing_with_preset() {
        let app = app_with_word("cat", 6);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.outcome(), Some(Outcome::InProgress));
    }

    #[test]
    fn word_entry_then_win() {
        let mut app = App::new(GameConfig::default(), None);
        type_str(&mut app, "Cab");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "t");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guessing);

        type_str(&mut app, "cat");
        assert_eq!(app.outcome(), Some(Outcome::Won));
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut app = App::new(GameConfig::default(), None);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::WordEntry);
        assert!(app.game.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn losing_game() {
        let mut app = app_with_word("cat", 2);
        type_str(&mut app, "xxy");

        assert_eq!(app.outcome(), Some(Outcome::Lost));
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn repeated_wrong_guess_costs_one_try() {
        let mut app = app_with_word("cat", 3);
        type_str(&mut app, "zz");

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.tries_remaining(), 2);
        assert!(app.messages.last().unwrap().text.contains("already guessed"));
    }

    #[test]
    fn non_letter_keys_do_not_guess() {
        let mut app = app_with_word("cat", 3);
        type_str(&mut app, "1!");

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.tries_remaining(), 3);
        assert!(game.wrong_guesses().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn new_game_after_finish() {
        let mut app = app_with_word("a", 1);
        type_str(&mut app, "a");
        assert_eq!(app.input_mode, InputMode::Finished);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::WordEntry);
        assert!(app.game.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with_word("cat", 6);
        press(&mut app, KeyCode::Char('q'));
        // 'q' is a guess while playing
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = app_with_word("cat", 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn modifier_chords_do_not_type() {
        let mut app = App::new(GameConfig::default(), None);
        type_str(&mut app, "ox");
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT));
        assert_eq!(app.word_buffer, "oxY");

        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT));
        let game = app.game.as_ref().unwrap();
        assert!(game.wrong_guesses().is_empty());
        assert_eq!(game.tries_remaining(), 6);
    }

    #[test]
    fn screen_setup_leaves_mouse_alone() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        leave_screen(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\u{1b}[?1049h"));
        assert!(out.contains("\u{1b}[?1049l"));
        assert!(!out.contains("\u{1b}[?1000h"));
        assert!(!out.contains("\u{1b}[?1000l"));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(GameConfig::default(), None);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 1,
        };
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
