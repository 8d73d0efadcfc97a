//! Turn-by-turn driver for a single game

use super::{LetterSource, Renderer, SessionError, SessionOutcome};
use crate::core::{GameState, Letter, Outcome, TargetWord};
use tracing::{debug, info};

/// Final state of a session together with how it ended
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub state: GameState,
    pub outcome: SessionOutcome,
}

/// Read the word to guess from the first line of input
///
/// # Errors
/// Returns `SessionError::MissingTarget` if input ends before a line is read,
/// `SessionError::InvalidTarget` if the line is not a usable word, and
/// `SessionError::Io` if reading fails.
pub fn read_target<S: LetterSource>(source: &mut S) -> Result<TargetWord, SessionError> {
    let line = source.read_line()?.ok_or(SessionError::MissingTarget)?;
    let target = TargetWord::new(&line)?;
    debug!(length = target.len(), "target word accepted");
    Ok(target)
}

/// Play one game to completion
///
/// Each turn renders the state, reads one line and, if it is a single letter,
/// applies the guess. Invalid lines are reported and re-prompted without
/// touching the state. End of input ends the session as
/// [`SessionOutcome::Abandoned`].
///
/// # Errors
/// Returns `SessionError::Io` if the source or renderer fails.
pub fn run_session<S, R>(
    mut state: GameState,
    source: &mut S,
    renderer: &mut R,
) -> Result<SessionReport, SessionError>
where
    S: LetterSource,
    R: Renderer,
{
    let outcome = loop {
        match state.outcome() {
            Outcome::Won => break SessionOutcome::Won,
            Outcome::Lost => break SessionOutcome::Lost,
            Outcome::InProgress => {}
        }

        renderer.render_turn(&state.view())?;

        let Some(line) = source.read_line()? else {
            info!(
                tries_remaining = state.tries_remaining(),
                "input ended before the game was decided"
            );
            break SessionOutcome::Abandoned;
        };

        match Letter::parse(&line) {
            Ok(letter) => {
                let result = state.guess_letter(letter);
                debug!(%letter, ?result, tries_remaining = state.tries_remaining(), "guess applied");
                renderer.report_guess(letter, result)?;
            }
            Err(err) => {
                debug!(input = line.trim(), %err, "rejected input");
                renderer.reject_input(&err)?;
            }
        }
    };

    info!(
        ?outcome,
        tries_remaining = state.tries_remaining(),
        wrong_guesses = state.wrong_guesses().len(),
        "game finished"
    );
    renderer.render_final(&state, outcome)?;

    Ok(SessionReport { state, outcome })
}
