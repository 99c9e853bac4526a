//! The environment surface consumed by policy and training code.
//!
//! `TicTacToeEnv` owns the RNG and the mover policy; boards stay in the
//! caller's hands as plain values. `reset` hands out a fresh board and
//! `step` advances it by one agent move plus one environment reply.

pub mod engine;
pub mod error;
pub mod mover;

pub use engine::TicTacToeEnv;
pub use error::EngineError;
pub use mover::{MoverPolicy, ScriptedMover, UniformMover};
