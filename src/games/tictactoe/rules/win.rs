//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the 8 fixed winning lines.
///
/// Variant order is the scan order used by [`evaluate`]: rows top to
/// bottom, columns left to right, then the main and anti diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Flat board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Whether `pos` is one of this line's squares.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// A completed line and the marker that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// Marker occupying all three squares.
    pub marker: Marker,
    /// The completed line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in scan order together with its
/// marker, or `None` when no line is complete. Full boards without a line
/// also return `None`; draws are not reported here.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(marker) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(Win::new(marker, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
            match c {
                'X' => board = board.with_mark(pos, Marker::X),
                'O' => board = board.with_mark(pos, Marker::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of("XXXOO....");
        assert_eq!(evaluate(&board), Some(Win::new(Marker::X, Line::TopRow)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of("XXO.O.OX.");
        assert_eq!(evaluate(&board), Some(Win::new(Marker::O, Line::AntiDiagonal)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(evaluate(&board_of("XX.......")), None);
        assert_eq!(evaluate(&board_of("XXO......")), None);
    }

    #[test]
    fn test_full_board_without_line() {
        assert_eq!(evaluate(&board_of("XOXXOOOXO")), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Top row and left column both complete.
        let board = board_of("XXXX..X..");
        assert_eq!(evaluate(&board), Some(Win::new(Marker::X, Line::TopRow)));

        // Right column and anti diagonal share square 2.
        let board = board_of("..O.OOO.O");
        assert_eq!(evaluate(&board).map(|w| w.line), Some(Line::RightColumn));
    }

    #[test]
    fn test_line_indices_match_scan_table() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        let actual: Vec<_> = Line::iter().map(Line::indices).collect();
        assert_eq!(actual, expected);
    }
}
