//! Rewind Tic-Tac-Toe library - a tic-tac-toe engine with move history
//!
//! Two markers take turns on a 3x3 board. Every board reached so far is
//! kept, so a session can jump back to any earlier move and play on from
//! there, dropping the abandoned future.
//!
//! # Architecture
//!
//! - **Rules**: pure win evaluation over the 8 fixed lines
//! - **Session**: board history, current move pointer, observers
//! - **Console**: line-oriented driver for terminals and scripts
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Marker, Position, Status};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::Center)?;
//! session.apply_move(Position::TopLeft)?;
//! assert_eq!(session.status(), Status::NextPlayer(Marker::X));
//!
//! session.jump_to(0)?;
//! session.apply_move(Position::TopRight)?;
//! assert_eq!(session.history_len(), 2);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Console driver
pub use console::{
    Command, CommandError, Console, HELP, history_label, render_board, render_history,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, GameSession, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, Line, Marker, MonotonicBoardInvariant, Move, MoveError,
    Position, SessionEvent, SessionInvariants, SessionObserver, SessionSnapshot, Square, Status,
    Win, evaluate,
};
