//! Plain-text views of a session.

use crate::games::tictactoe::{Board, GameSession, Line, Position, Square};

/// Label for history entry `move_number`.
pub fn history_label(move_number: usize) -> String {
    if move_number > 0 {
        format!("Go to move #{}", move_number)
    } else {
        "Go to game start".to_string()
    }
}

/// Renders a board as three rows of cells.
///
/// Empty squares show their index so they can be typed back as a move.
/// Squares on `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| {
                    let symbol = match board.get(pos) {
                        Square::Empty => pos.to_index().to_string(),
                        Square::Occupied(marker) => marker.to_string(),
                    };
                    if highlight.is_some_and(|line| line.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

/// Renders the history jump list, marking the current entry with `*`.
pub fn render_history(session: &GameSession) -> String {
    (0..session.history_len())
        .map(|move_number| {
            let marker = if move_number == session.current_move() { '*' } else { ' ' };
            format!("{} {}", marker, history_label(move_number))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
