//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::super::{GameSession, Marker, Square};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The marker added between snapshot `i` and `i + 1` is X when `i` is
/// even and O when it is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Square::Occupied(Marker::for_move(i));
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| *after == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let session = GameSession::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
        ])
        .expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_marker_violates() {
        let mut session = GameSession::replay(&[Position::Center]).expect("legal move");
        let doubled = session.history[1].with_mark(Position::TopLeft, Marker::X);
        session.history.push(doubled);

        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
