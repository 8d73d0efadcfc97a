//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout, clearing the screen between turns.

use crate::config::GameConfig;
use crate::core::{GameState, GuessResult, Letter, LetterError, TurnView};
use crate::output::display::{
    print_final, print_guess_feedback, print_invalid_target, print_rejected, print_turn,
    print_welcome,
};
use crate::session::{
    LetterSource, Renderer, SessionError, SessionOutcome, read_target, run_session,
};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Line reader over any buffered input
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LetterSource for LineSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        // Undecodable bytes become U+FFFD, which later validation rejects
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Renders the game as plain text, optionally clearing the screen each turn
///
/// Feedback from the previous guess is held back and shown after the clear,
/// so the player sees it alongside the next board.
pub struct ConsoleRenderer<W> {
    out: W,
    clear_screen: bool,
    pending: Vec<u8>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub const fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            clear_screen,
            pending: Vec::new(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.out.write_all(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_turn(&mut self, view: &TurnView) -> io::Result<()> {
        self.clear()?;
        self.flush_pending()?;
        print_turn(&mut self.out, view)
    }

    fn reject_input(&mut self, error: &LetterError) -> io::Result<()> {
        print_rejected(&mut self.pending, error)
    }

    fn report_guess(&mut self, letter: Letter, result: GuessResult) -> io::Result<()> {
        print_guess_feedback(&mut self.pending, letter, result)
    }

    fn render_final(&mut self, state: &GameState, outcome: SessionOutcome) -> io::Result<()> {
        self.clear()?;
        self.pending.clear();
        print_final(&mut self.out, state, outcome)
    }
}

/// Play one game over arbitrary input and output streams
///
/// Returns `None` if the word to guess was missing or unusable; the player has
/// already been told so.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_console<R, W>(
    config: &GameConfig,
    input: R,
    output: W,
    clear_screen: bool,
) -> Result<Option<SessionOutcome>>
where
    R: BufRead,
    W: Write,
{
    let mut source = LineSource::new(input);
    let mut renderer = ConsoleRenderer::new(output, clear_screen);

    let preset = config.preset_target();
    print_welcome(&mut renderer.out, matches!(preset, Ok(None)))?;

    let target = match preset {
        Ok(Some(target)) => Ok(target),
        Ok(None) => read_target(&mut source),
        Err(err) => Err(SessionError::from(err)),
    };

    let target = match target {
        Ok(target) => target,
        Err(SessionError::Io(err)) => return Err(err.into()),
        Err(err) => {
            info!(%err, "cannot start game");
            print_invalid_target(&mut renderer.out)?;
            return Ok(None);
        }
    };

    info!(length = target.len(), max_tries = config.max_tries, "starting game");
    let report = run_session(config.start(target), &mut source, &mut renderer)?;
    Ok(Some(report.outcome))
}

/// Run the simple interactive CLI mode on the real terminal
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(config: &GameConfig) -> Result<Option<SessionOutcome>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_console(config, stdin.lock(), stdout.lock(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::display::{
        ABANDON_MESSAGE, INVALID_LETTER_MESSAGE, INVALID_TARGET_MESSAGE, LOSS_MESSAGE,
        WIN_MESSAGE,
    };
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn play(config: &GameConfig, input: &str) -> (Option<SessionOutcome>, String) {
        let mut output = Vec::new();
        let outcome = play_console(config, Cursor::new(input), &mut output, false).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn line_source_reads_until_eof() {
        let mut source = LineSource::new(Cursor::new("a\nbc\n"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("a\n"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("bc\n"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn line_source_replaces_invalid_utf8() {
        let mut source = LineSource::new(Cursor::new(&b"\xffa\nb"[..]));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("\u{fffd}a\n"));
        assert_eq!(source.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn undecodable_guess_is_reprompted() {
        let config = GameConfig::new(Some("cat".to_string()), 6);
        let mut output = Vec::new();
        let outcome = play_console(
            &config,
            Cursor::new(&b"\xff\nc\na\nt\n"[..]),
            &mut output,
            false,
        )
        .unwrap();

        assert_eq!(outcome, Some(SessionOutcome::Won));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(INVALID_LETTER_MESSAGE));
        assert!(output.contains(WIN_MESSAGE));
    }

    #[test]
    fn undecodable_word_exits() {
        let mut output = Vec::new();
        let outcome = play_console(
            &GameConfig::default(),
            Cursor::new(&b"\xc3\n"[..]),
            &mut output,
            false,
        )
        .unwrap();

        assert_eq!(outcome, None);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(INVALID_TARGET_MESSAGE));
        assert!(!output.contains("Enter a letter"));
    }

    #[test]
    fn ordinary_exits_stay_below_warn() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            play(&GameConfig::default(), "cat\nc\n");
            play(&GameConfig::default(), "\n");
        });

        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn full_game_won() {
        let (outcome, output) = play(&GameConfig::default(), "Cat\nc\na\nt\n");

        assert_eq!(outcome, Some(SessionOutcome::Won));
        assert!(output.contains("Welcome to Hangman!"));
        assert!(output.contains("Enter the word to guess: "));
        assert!(output.contains("Enter a letter: "));
        assert!(output.contains(WIN_MESSAGE));
    }

    #[test]
    fn full_game_lost() {
        let config = GameConfig::new(None, 2);
        let (outcome, output) = play(&config, "cat\nx\ny\n");

        assert_eq!(outcome, Some(SessionOutcome::Lost));
        assert!(output.contains(LOSS_MESSAGE));
        assert!(output.contains("c a t"));
    }

    #[test]
    fn preset_word_skips_prompt() {
        let config = GameConfig::new(Some("ox".to_string()), 6);
        let (outcome, output) = play(&config, "o\nx\n");

        assert_eq!(outcome, Some(SessionOutcome::Won));
        assert!(!output.contains("Enter the word to guess"));
    }

    #[test]
    fn invalid_letter_shown_on_next_turn() {
        let config = GameConfig::new(Some("a".to_string()), 6);
        let (outcome, output) = play(&config, "42\na\n");

        assert_eq!(outcome, Some(SessionOutcome::Won));
        assert!(output.contains(INVALID_LETTER_MESSAGE));
    }

    #[test]
    fn empty_word_exits() {
        let (outcome, output) = play(&GameConfig::default(), "\nc\n");

        assert_eq!(outcome, None);
        assert!(output.contains(INVALID_TARGET_MESSAGE));
        assert!(!output.contains("Enter a letter"));
    }

    #[test]
    fn missing_word_exits() {
        let (outcome, output) = play(&GameConfig::default(), "");

        assert_eq!(outcome, None);
        assert!(output.contains(INVALID_TARGET_MESSAGE));
    }

    #[test]
    fn invalid_preset_word_exits() {
        let config = GameConfig::new(Some("two words".to_string()), 6);
        let (outcome, output) = play(&config, "t\n");

        assert_eq!(outcome, None);
        assert!(output.contains(INVALID_TARGET_MESSAGE));
    }

    #[test]
    fn end_of_input_reports_unresolved() {
        let (outcome, output) = play(&GameConfig::default(), "cat\nc\n");

        assert_eq!(outcome, Some(SessionOutcome::Abandoned));
        assert!(output.contains(ABANDON_MESSAGE));
    }

    #[test]
    fn clearing_emits_escape_sequences() {
        let config = GameConfig::new(Some("a".to_string()), 6);
        let mut output = Vec::new();
        play_console(&config, Cursor::new("a\n"), &mut output, true).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("\u{1b}[2J"));
    }
}
