//! # num-tictactoe
//!
//! A numerical tic-tac-toe environment for RL training.
//!
//! Two players fill a 3×3 grid with the numbers 1–9, each number used at
//! most once. The agent places odd numbers, the environment places even
//! numbers, and any row, column, or diagonal summing to 15 wins. The crate
//! is the rule engine only: the policy that picks agent actions, the
//! training loop, and any rendering live outside it.
//!
//! ## Design Principles
//!
//! 1. **Value-Oriented State**: `Board` is a small `Copy` value. Nothing in
//!    the engine ever mutates a board the caller handed in; `step` works on
//!    a copy and returns it.
//!
//! 2. **Deterministic Randomness**: The environment's reply is the only
//!    nondeterminism, drawn through a seeded, forkable [`GameRng`] behind
//!    the [`MoverPolicy`] seam so tests can script it.
//!
//! 3. **Loud Failures**: Illegal agent actions and an exhausted reply set
//!    surface as [`EngineError`] instead of being silently corrected.
//!
//! ## Modules
//!
//! - `core`: Board, actions, outcomes, RNG
//! - `env`: The environment surface (`reset`/`step`), mover policies, errors

pub mod core;
pub mod env;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, GameRng, GameRngState, Outcome, Player, CELL_COUNT, WINNING_LINES,
    WINNING_SUM,
};

pub use crate::env::{EngineError, MoverPolicy, ScriptedMover, TicTacToeEnv, UniformMover};
