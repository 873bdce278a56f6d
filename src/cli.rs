//! Command-line interface for rewind_tictactoe.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - two-player tic-tac-toe with rewindable history
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Two-player tic-tac-toe with rewindable history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to console config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Moves to play before handing over, e.g. 0,4,1
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,
    },

    /// Play a fixed move list and print the result
    Replay {
        /// Moves to play, e.g. 0,4,1,3,2
        #[arg(long, value_delimiter = ',', value_parser = parse_position, required = true)]
        moves: Vec<Position>,

        /// Print the session as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a position (0-8 or a label like center)", s))
}
