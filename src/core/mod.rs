//! Core engine types: board, actions, outcomes, RNG.
//!
//! These are pure value types with no knowledge of the environment loop.
//! The `env` module composes them into the `reset`/`step` surface.

pub mod action;
pub mod board;
pub mod outcome;
pub mod rng;

pub use action::{Action, Player};
pub use board::{Board, Cell, CELL_COUNT, WINNING_LINES, WINNING_SUM};
pub use outcome::Outcome;
pub use rng::{GameRng, GameRngState};
