//! Game session with rewindable history.
//!
//! A session owns every board snapshot along the active branch plus a
//! pointer to the one currently shown. Playing from an earlier snapshot
//! drops everything after it before appending the new board.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::observer::{SessionEvent, SessionObserver};
use super::rules::{Line, evaluate};
use super::snapshot::SessionSnapshot;
use super::{Board, Marker, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What the current board means for the players.
///
/// A full board without a winning line still reports `NextPlayer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Marker),
    /// No completed line; the marker to place next.
    #[display("Next player: {}", _0)]
    NextPlayer(Marker),
}

/// Tic-tac-toe session: board history and the current move pointer.
pub struct GameSession {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Creates a session at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self {
            history: vec![Board::new()],
            current_move: 0,
            observers: Vec::new(),
        }
    }

    /// Builds a session by playing `positions` in order from the start.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &position in positions {
            session.apply_move(position)?;
        }
        Ok(session)
    }

    /// Registers an observer notified after every successful mutation.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's marker at `position`.
    ///
    /// Fails with [`MoveError::GameAlreadyWon`] if the current board has a
    /// winning line, then with [`MoveError::CellOccupied`] if the square is
    /// taken. Any snapshots after the current move are discarded.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if let Some(win) = evaluate(&board) {
            warn!(winner = %win.marker, "Rejected move on a won board");
            return Err(MoveError::GameAlreadyWon(win.marker));
        }

        if !board.is_empty(position) {
            warn!("Rejected move on an occupied square");
            return Err(MoveError::CellOccupied(position));
        }

        let marker = self.whose_turn();
        let next = board.with_mark(position, marker);

        let keep = self.current_move + 1;
        let discarded = self.history.len() - keep;
        self.history.truncate(keep);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            %marker,
            move_number = self.current_move,
            discarded,
            "Move applied"
        );
        self.check_invariants();

        self.notify(SessionEvent::MovePlayed {
            mov: Move::new(marker, position),
            move_number: self.current_move,
            discarded,
        });
        Ok(())
    }

    /// Makes history entry `target` the current move.
    ///
    /// History itself is left alone, so jumping forward again is possible
    /// until the next move is played.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), MoveError> {
        if target >= self.history.len() {
            warn!(history_len = self.history.len(), "Rejected jump outside history");
            return Err(MoveError::InvalidMoveIndex {
                requested: target,
                history_len: self.history.len(),
            });
        }

        let from = self.current_move;
        self.current_move = target;
        debug!(from, to = target, "Jumped in history");
        self.check_invariants();

        self.notify(SessionEvent::Jumped { from, to: target });
        Ok(())
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the current move in history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Marker that plays next from the current move.
    pub fn whose_turn(&self) -> Marker {
        Marker::for_move(self.current_move)
    }

    /// Winner or next player for the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match evaluate(self.current_board()) {
            Some(win) => Status::Winner(win.marker),
            None => Status::NextPlayer(self.whose_turn()),
        }
    }

    /// The completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        evaluate(self.current_board()).map(|win| win.line)
    }

    /// Number of snapshots in history, including the empty start board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// All snapshots along the active branch.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Snapshot at history index `index`.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }

    fn check_invariants(&self) {
        let result = SessionInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(invariant = %violation.description, "Session invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
    }

    fn notify(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("history", &self.history)
            .field("current_move", &self.current_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}
