//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Marker placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Marker {
    /// Marker X (always moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Marker whose turn it is after `moves_played` moves.
    pub fn for_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// Immutable 3x3 board snapshot.
///
/// Boards are never edited in place; [`Board::with_mark`] returns the
/// successor snapshot and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `marker` placed at `pos`.
    pub fn with_mark(&self, pos: Position, marker: Marker) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(marker);
        Self { squares }
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_source_board_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Marker::X);

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Marker::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_marker_for_move_parity() {
        assert_eq!(Marker::for_move(0), Marker::X);
        assert_eq!(Marker::for_move(1), Marker::O);
        assert_eq!(Marker::for_move(8), Marker::X);
        assert_eq!(Marker::X.opponent(), Marker::O);
    }

    #[test]
    fn test_display_shows_indices_for_empty_squares() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Marker::X)
            .with_mark(Position::Center, Marker::O);
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
