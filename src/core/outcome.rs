//! Board classification after a move, and the reward it maps to.
//!
//! `Win` and `Loss` are relative to the agent: the terminal classifier only
//! ever produces `Win` (for whoever just moved), and `step` renames a win
//! completed by the environment's reply to `Loss` when reconciling the
//! reward. Keeping both variants explicit avoids reusing one "Win" tag for
//! two differently-rewarded situations.

use serde::{Deserialize, Serialize};

/// Classification of a board after a move completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    Resume,
    /// The move that just completed made a winning line.
    Win,
    /// Board full, no winning line.
    Tie,
    /// The environment's reply won; the agent lost.
    Loss,
}

impl Outcome {
    /// Scalar reward signal for external learning logic.
    ///
    /// The enum is closed, so the table is exhaustive; there is no
    /// "unknown status" fallthrough to defend against.
    #[must_use]
    pub const fn reward(self) -> i64 {
        match self {
            Outcome::Win => 10,
            Outcome::Tie => 0,
            Outcome::Resume => -1,
            Outcome::Loss => -10,
        }
    }

    /// Whether this outcome ends the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Resume)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Resume => write!(f, "Resume"),
            Outcome::Win => write!(f, "Win"),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Loss => write!(f, "Loss"),
        }
    }
}
