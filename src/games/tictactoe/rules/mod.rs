//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules are separated from session storage so any caller can evaluate
//! a board without owning a game.

pub mod win;

pub use win::{Line, Win, evaluate};
