//! Tracing setup
//!
//! `RUST_LOG` controls the filter; without it only warnings and errors are
//! shown. Logs never go to stdout, which belongs to the game.

use anyhow::Result;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Write to a file, without ANSI colors
    File(&'a Path),
    /// Write to stderr
    Stderr,
    /// Discard everything (the full-screen UI owns the terminal)
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Pick a target from an optional log file and whether the TUI is running
    #[must_use]
    pub fn select(log_file: Option<&'a Path>, full_screen: bool) -> Self {
        match (log_file, full_screen) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    match target {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}
