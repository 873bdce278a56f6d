//! Move records and move errors.

use super::{Marker, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// Error returned when a session rejects an operation.
///
/// Every variant leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The current board already has a winning line.
    #[display("Game is already won by {}", _0)]
    GameAlreadyWon(Marker),

    /// A history jump targeted a move that does not exist.
    #[display("No move #{} in history of length {}", requested, history_len)]
    InvalidMoveIndex {
        /// The requested move number.
        requested: usize,
        /// History length at the time of the request.
        history_len: usize,
    },
}

impl std::error::Error for MoveError {}
