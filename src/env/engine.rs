//! The rule engine: action spaces, terminal classification, and the
//! two-ply `step`.
//!
//! One call to [`TicTacToeEnv::step`] is one atomic transition from the
//! caller's perspective: the agent's move, then (if the game is still
//! live) the environment's reply. `Resume` therefore always reflects a
//! board where both sides have just moved.

use crate::core::{Action, Board, GameRng, Outcome};

use super::error::EngineError;
use super::mover::{MoverPolicy, UniformMover};

/// The numerical tic-tac-toe environment.
///
/// Owns the RNG and the mover policy; board state lives with the caller as
/// a plain value. `step` never mutates the board it is given.
///
/// ## Example
///
/// ```
/// use num_tictactoe::TicTacToeEnv;
///
/// let mut env = TicTacToeEnv::new(42);
/// let board = env.reset();
///
/// let (agent_actions, _) = env.action_space(&board);
/// let (next, reward, done) = env.step(&board, agent_actions[0]).unwrap();
///
/// // The caller's board is untouched
/// assert_eq!(board.filled_count(), 0);
/// assert!(next.filled_count() >= 1);
/// assert!(reward >= -10 && reward <= 10);
/// let _ = done;
/// ```
#[derive(Clone, Debug)]
pub struct TicTacToeEnv<M: MoverPolicy = UniformMover> {
    mover: M,
    rng: GameRng,
}

impl TicTacToeEnv<UniformMover> {
    /// Create an environment with the uniform random mover.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_mover(UniformMover, seed)
    }
}

impl<M: MoverPolicy> TicTacToeEnv<M> {
    /// Create an environment with a custom mover policy.
    #[must_use]
    pub fn with_mover(mover: M, seed: u64) -> Self {
        Self {
            mover,
            rng: GameRng::new(seed),
        }
    }

    /// Start a new episode: a fresh board of nine empty cells.
    ///
    /// Every call constructs a new value; episodes never share state.
    #[must_use]
    pub fn reset(&self) -> Board {
        Board::empty()
    }

    /// All legal actions, as `(agent_actions, mover_actions)`.
    ///
    /// Each side's list is the cartesian product of the empty positions
    /// with that side's unused values. An empty list means that side has
    /// no legal move.
    #[must_use]
    pub fn action_space(&self, board: &Board) -> (Vec<Action>, Vec<Action>) {
        let positions = board.allowed_positions();
        let (agent_values, mover_values) = board.allowed_values();

        let product = |values: &[u8]| -> Vec<Action> {
            positions
                .iter()
                .flat_map(|&position| values.iter().map(move |&value| Action::new(position, value)))
                .collect()
        };

        (product(&agent_values), product(&mover_values))
    }

    /// Classify a board: `(terminal, outcome)`.
    ///
    /// `Win` if a line is complete, else `Tie` if the board is full, else
    /// `Resume`. `Loss` is never produced here; it exists only in `step`'s
    /// reward reconciliation.
    #[must_use]
    pub fn is_terminal(&self, board: &Board) -> (bool, Outcome) {
        if board.is_winning() {
            (true, Outcome::Win)
        } else if board.is_full() {
            (true, Outcome::Tie)
        } else {
            (false, Outcome::Resume)
        }
    }

    /// Advance the game by one agent move and, if the game is still live,
    /// one environment reply. Returns `(next_board, reward, done)`.
    ///
    /// The caller's board is never mutated; the returned board reflects
    /// both plies. `done` reports the board as returned, after the reply.
    ///
    /// Rewards are from the agent's perspective: +10 for a win, 0 for a
    /// tie, -1 for a live board, and -10 when the reply completes a line
    /// (the agent's `Resume` becomes a `Loss`).
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAction`] if `action` is not in the current
    ///   agent action space.
    /// - [`EngineError::ExhaustedActionSpace`] if the mover has no legal
    ///   reply on a non-terminal board (unreachable under the environment's
    ///   own alternation; reachable only from hand-built boards).
    pub fn step(
        &mut self,
        board: &Board,
        action: Action,
    ) -> Result<(Board, i64, bool), EngineError> {
        let (agent_actions, _) = self.action_space(board);
        if !agent_actions.contains(&action) {
            return Err(EngineError::InvalidAction(action));
        }

        let mut next = board.with_move(action);
        let (terminal, status) = self.is_terminal(&next);
        let mut reward = status.reward();

        if terminal {
            // The mover does not reply to a terminal agent move.
            return Ok((next, reward, true));
        }

        let (_, mover_actions) = self.action_space(&next);
        let reply = self
            .mover
            .choose(&mover_actions, &mut self.rng)
            .ok_or(EngineError::ExhaustedActionSpace)?;
        next.place(reply);

        let (done, status) = self.is_terminal(&next);
        if done && status == Outcome::Win {
            // The reply won, which from the agent's side is a loss.
            reward = Outcome::Loss.reward();
        }

        Ok((next, reward, done))
    }

    /// Fork the environment's RNG for an independent rollout stream.
    #[must_use]
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Access the environment's RNG, e.g. to capture its state.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}
