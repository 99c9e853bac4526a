//! Policies for drawing the environment's reply.
//!
//! The production draw is uniform over the legal set, but it goes through
//! a trait so tests can substitute a deterministic source without touching
//! `step` itself.

use std::collections::VecDeque;

use crate::core::{Action, GameRng};

/// How the environment's reply is chosen from its legal actions.
pub trait MoverPolicy: Send + Sync {
    /// Choose one reply from `legal`.
    ///
    /// Returns `None` when `legal` is empty; the engine turns that into
    /// [`EngineError::ExhaustedActionSpace`](crate::env::EngineError).
    fn choose(&mut self, legal: &[Action], rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random reply, the production policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformMover;

impl MoverPolicy for UniformMover {
    fn choose(&mut self, legal: &[Action], rng: &mut GameRng) -> Option<Action> {
        rng.choose(legal).copied()
    }
}

/// Scripted replies for deterministic tests.
///
/// Pops replies front-to-back; a scripted reply must be legal for the
/// board it is played on, which the owning test is responsible for.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMover {
    replies: VecDeque<Action>,
}

impl ScriptedMover {
    /// Create a mover that plays `replies` in order.
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = Action>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
        }
    }

    /// Replies not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl MoverPolicy for ScriptedMover {
    fn choose(&mut self, legal: &[Action], _rng: &mut GameRng) -> Option<Action> {
        let reply = self.replies.pop_front()?;
        debug_assert!(legal.contains(&reply), "scripted reply is not legal");
        Some(reply)
    }
}
