//! Error taxonomy for the environment.
//!
//! Both variants are caller-contract or invariant violations, not
//! recoverable runtime conditions; there is nothing to retry.

use thiserror::Error;

use crate::core::Action;

/// Failures surfaced by [`TicTacToeEnv::step`](crate::env::TicTacToeEnv::step).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The submitted action is not in the current agent action space:
    /// wrong parity, already-used value, or occupied/out-of-range position.
    /// Policy code must only submit actions drawn from the action space.
    #[error("invalid agent action ({0}): not in the current action space")]
    InvalidAction(Action),

    /// The environment had no legal reply on a non-terminal board.
    ///
    /// Unreachable in games the environment conducts itself (five odd and
    /// four even values cover nine cells under strict alternation); hitting
    /// it means a hand-built board broke the alternation invariant.
    #[error("environment has no legal reply on a non-terminal board")]
    ExhaustedActionSpace,
}
