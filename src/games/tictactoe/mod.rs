mod action;
mod invariants;
mod observer;
mod position;
mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, SessionInvariants,
};
pub use observer::{SessionEvent, SessionObserver};
pub use position::Position;
pub use rules::{Line, Win, evaluate};
pub use session::{GameSession, Status};
pub use snapshot::SessionSnapshot;
pub use types::{Board, Marker, Square};
