//! Serializable view of a game session.

use super::session::{GameSession, Status};
use super::{Marker, Square};
use serde::{Deserialize, Serialize};

/// Flat, serializable copy of a session's state.
///
/// Each board is nine optional markers in row-major order, so the JSON
/// form reads as `[["X", null, ...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Boards along the active branch, oldest first.
    pub history: Vec<[Option<Marker>; 9]>,
    /// Index of the displayed board.
    pub current_move: usize,
    /// Status of the displayed board.
    pub status: Status,
    /// Indices of the winning line on the displayed board.
    pub winning_line: Option<[usize; 3]>,
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        let history = session
            .history()
            .iter()
            .map(|board| (*board.squares()).map(Square::marker))
            .collect();

        Self {
            history,
            current_move: session.current_move(),
            status: session.status(),
            winning_line: session.winning_line().map(|line| line.indices()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_snapshot_json_shape() {
        let session = GameSession::replay(&[Position::Center]).expect("legal move");
        let json = serde_json::to_value(session.snapshot()).expect("serializable");

        assert_eq!(json["current_move"], 1);
        assert_eq!(json["history"][0][4], serde_json::Value::Null);
        assert_eq!(json["history"][1][4], "X");
        assert_eq!(json["status"]["NextPlayer"], "O");
        assert_eq!(json["winning_line"], serde_json::Value::Null);
    }
}
