//! Hangman - CLI
//!
//! Play hangman in the terminal, either line by line or in a full-screen TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    config::GameConfig,
    core::DEFAULT_MAX_TRIES,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::print_invalid_target,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to guess (prompted for when omitted)
    #[arg(short, long, global = true)]
    word: Option<String>,

    /// Number of wrong guesses allowed
    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_TRIES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_tries: u32,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-by-line game on stdin/stdout (default)
    Simple,

    /// Full-screen TUI game
    Play,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    init_tracing(LogTarget::select(
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    ))?;

    let config = GameConfig::new(cli.word, cli.max_tries);

    match command {
        Commands::Simple => run_simple_command(&config),
        Commands::Play => run_play_command(config),
    }
}

fn run_simple_command(config: &GameConfig) -> Result<ExitCode> {
    match run_simple(config)? {
        Some(_) => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}

fn run_play_command(config: GameConfig) -> Result<ExitCode> {
    let Ok(preset) = config.preset_target() else {
        print_invalid_target(&mut io::stdout())?;
        return Ok(ExitCode::FAILURE);
    };

    run_tui(App::new(config, preset))?;
    Ok(ExitCode::SUCCESS)
}
