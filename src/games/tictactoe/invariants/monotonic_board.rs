//! Monotonic board invariant: each snapshot adds exactly one marker.

use super::super::{GameSession, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from Empty to Occupied; no other square changes and
/// nothing is ever erased.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .collect();

            matches!(
                changed.as_slice(),
                [(Square::Empty, Square::Occupied(_))]
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one marker to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Marker, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal moves");
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = GameSession::replay(&[Position::Center]).expect("legal move");
        let overwritten = Board::new().with_mark(Position::Center, Marker::O);
        session.history.push(overwritten);

        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut session = GameSession::new();
        session.history.push(Board::new());

        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
