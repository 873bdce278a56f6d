//! Rewind Tic-Tac-Toe - Unified CLI
//!
//! Interactive console and headless replay over the same game session.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_tictactoe::{Console, ConsoleConfig, GameSession, Position, render_board};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    match cli.command {
        Command::Play { config, moves } => run_console(config, moves),
        Command::Replay { moves, json } => run_replay(moves, json),
    }
}

/// Logs go to stderr, or to a file so they never mix with console output.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Run the interactive console on stdin/stdout
#[instrument(skip(moves), fields(preloaded = moves.len()))]
fn run_console(config: Option<PathBuf>, moves: Vec<Position>) -> Result<()> {
    let config = match config {
        Some(path) => ConsoleConfig::from_file(&path)?,
        None => ConsoleConfig::default(),
    };
    let session = GameSession::replay(&moves).context("Preloaded moves were rejected")?;

    info!("Starting interactive console");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(session, config, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Play a move list and print the final board
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(moves: Vec<Position>, json: bool) -> Result<()> {
    let session = GameSession::replay(&moves).context("Move list was rejected")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", render_board(session.current_board(), session.winning_line()));
        println!("{}", session.status());
    }
    Ok(())
}
