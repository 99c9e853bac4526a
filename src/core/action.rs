//! Action representation: a position plus the value to place there.
//!
//! An action is the pair (empty cell index, unused value). Which values a
//! player may place is a parity rule: the agent owns the odd numbers, the
//! environment owns the even ones.

use serde::{Deserialize, Serialize};

/// The two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The externally-controlled side, placing odd values.
    Agent,
    /// The environment side, placing even values drawn at random.
    Mover,
}

impl Player {
    /// Whether this player is allowed to place `value`.
    #[must_use]
    pub const fn owns_value(self, value: u8) -> bool {
        match self {
            Player::Agent => value % 2 == 1,
            Player::Mover => value % 2 == 0,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Agent => Player::Mover,
            Player::Mover => Player::Agent,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Agent => write!(f, "agent"),
            Player::Mover => write!(f, "mover"),
        }
    }
}

/// A complete move: place `value` at cell `position`.
///
/// Actions are plain data; legality (empty position, unused value, correct
/// parity) is established by drawing them from the action space, not by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Target cell index, 0..9 row-major.
    pub position: usize,
    /// Value to place, 1..=9.
    pub value: u8,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(position: usize, value: u8) -> Self {
        Self { position, value }
    }

    /// Which player's parity this action's value belongs to.
    ///
    /// Values outside 1..=9 belong to nobody; this still reports parity,
    /// and domain membership is checked by action-space validation.
    #[must_use]
    pub const fn mover_side(self) -> Player {
        if self.value % 2 == 1 {
            Player::Agent
        } else {
            Player::Mover
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "place {} at cell {}", self.value, self.position)
    }
}
