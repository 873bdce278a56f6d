//! History consistency invariant: a well-formed branch with a valid pointer.

use super::super::rules::evaluate;
use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: history is a well-formed branch.
///
/// History starts at the empty board, the current move points into it, and
/// only the last snapshot may carry a winning line.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some((_, earlier)) = history.split_last() else {
            return false;
        };

        history[0] == Board::new()
            && session.current_move() < history.len()
            && earlier.iter().all(|board| evaluate(board).is_none())
    }

    fn description() -> &'static str {
        "History starts empty, stops at the first win, and contains the current move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Marker, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .expect("legal moves");
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        session.current_move = 0;

        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut session = GameSession::new();
        session.current_move = 1;

        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ])
        .expect("legal moves");
        let extra = session.history[5].with_mark(Position::BottomRight, Marker::O);
        session.history.push(extra);

        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
