//! Change notification for session consumers.

use super::action::Move;

/// A successful change to a [`GameSession`](super::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A marker was placed and the history advanced.
    MovePlayed {
        /// The move that was applied.
        mov: Move,
        /// History index of the new board.
        move_number: usize,
        /// Snapshots dropped from the abandoned future branch.
        discarded: usize,
    },
    /// The current move pointer was moved.
    Jumped {
        /// Previous current move.
        from: usize,
        /// New current move.
        to: usize,
    },
}

/// Receives session events after each successful mutation.
///
/// Rejected operations never produce an event.
pub trait SessionObserver {
    /// Called once per successful mutation, after the session is updated.
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        (*self)(event)
    }
}
