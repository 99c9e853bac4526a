//! Board representation and read-only queries.
//!
//! The board is nine cells, row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A cell is either empty or holds one of 1..=9, each value used at most
//! once across the whole board. Empty is a tagged state (`Option`), never a
//! numeric sentinel, so an unfinished line can never accidentally sum to
//! the winning total.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;

/// A single cell: empty, or a placed value in 1..=9.
pub type Cell = Option<u8>;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The sum a completed line must reach to win.
pub const WINNING_SUM: u8 = 15;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
];

/// The 3×3 grid state.
///
/// `Board` is a plain `Copy` value; cloning is free, and callers that need
/// a non-destructive transition take a copy via [`Board::with_move`].
/// Cells are write-once: once a value lands in a cell it stays there for
/// the rest of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the cell at `position`.
    ///
    /// Panics if `position` is out of range; positions come from
    /// [`Board::allowed_positions`] or a validated [`Action`].
    #[must_use]
    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// All nine cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indices of all currently empty cells.
    #[must_use]
    pub fn allowed_positions(&self) -> SmallVec<[usize; CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether `value` has already been placed somewhere on the board.
    #[must_use]
    pub fn uses_value(&self, value: u8) -> bool {
        self.cells.iter().any(|c| *c == Some(value))
    }

    /// All values currently on the board, in cell order.
    #[must_use]
    pub fn used_values(&self) -> SmallVec<[u8; CELL_COUNT]> {
        self.cells.iter().filter_map(|c| *c).collect()
    }

    /// Unused values of 1..=9, partitioned by parity.
    ///
    /// Returns `(agent_values, mover_values)`: the odd values still
    /// available to the agent and the even values still available to the
    /// environment. Together with the used values these always cover
    /// exactly 1..=9, with no overlap.
    #[must_use]
    pub fn allowed_values(&self) -> (SmallVec<[u8; 5]>, SmallVec<[u8; 4]>) {
        let mut agent = SmallVec::new();
        let mut mover = SmallVec::new();

        for value in 1..=CELL_COUNT as u8 {
            if self.uses_value(value) {
                continue;
            }
            if value % 2 == 1 {
                agent.push(value);
            } else {
                mover.push(value);
            }
        }

        (agent, mover)
    }

    /// Whether any winning line is complete.
    ///
    /// A line only counts once all three of its cells are filled; empty
    /// cells never enter the arithmetic.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        WINNING_LINES.iter().any(|line| {
            match (self.cells[line[0]], self.cells[line[1]], self.cells[line[2]]) {
                (Some(a), Some(b), Some(c)) => a + b + c == WINNING_SUM,
                _ => false,
            }
        })
    }

    /// Write `action.value` into `action.position`, in place.
    ///
    /// Legality is the caller's contract: the position must be empty and
    /// the value unused. The environment validates agent actions against
    /// the action space before calling this.
    pub fn place(&mut self, action: Action) {
        debug_assert!(self.cells[action.position].is_none(), "cell already filled");
        debug_assert!(!self.uses_value(action.value), "value already used");
        self.cells[action.position] = Some(action.value);
    }

    /// Functional update: a copy of this board with `action` applied.
    ///
    /// This is what `step` uses so the caller's board is never touched.
    #[must_use]
    pub fn with_move(&self, action: Action) -> Self {
        let mut next = *self;
        next.place(action);
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * 3 + col] {
                    Some(v) => write!(f, "{}", v)?,
                    None => write!(f, ".")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from a sparse (position, value) list.
    fn board_with(moves: &[(usize, u8)]) -> Board {
        let mut board = Board::empty();
        for &(position, value) in moves {
            board.place(Action::new(position, value));
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();

        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert!(!board.is_winning());
        assert_eq!(board.allowed_positions().len(), CELL_COUNT);
    }

    #[test]
    fn test_allowed_positions_skips_filled() {
        let board = board_with(&[(0, 1), (4, 2), (8, 3)]);

        let positions = board.allowed_positions();
        assert_eq!(positions.len(), 6);
        assert!(!positions.contains(&0));
        assert!(!positions.contains(&4));
        assert!(!positions.contains(&8));
        assert!(positions.contains(&1));
    }

    #[test]
    fn test_allowed_values_partition() {
        let board = board_with(&[(0, 1), (1, 2), (2, 3), (3, 4)]);

        let (agent, mover) = board.allowed_values();
        assert_eq!(agent.as_slice(), &[5, 7, 9]);
        assert_eq!(mover.as_slice(), &[6, 8]);
    }

    #[test]
    fn test_allowed_values_full_partition_on_empty_board() {
        let (agent, mover) = Board::empty().allowed_values();

        assert_eq!(agent.as_slice(), &[1, 3, 5, 7, 9]);
        assert_eq!(mover.as_slice(), &[2, 4, 6, 8]);
    }

    #[test]
    fn test_is_winning_row() {
        // 1 + 6 + 8 = 15 across the top row
        let board = board_with(&[(0, 1), (1, 6), (2, 8)]);
        assert!(board.is_winning());
    }

    #[test]
    fn test_is_winning_diagonal() {
        // 2 + 5 + 8 = 15 on {0, 4, 8}
        let board = board_with(&[(0, 2), (4, 5), (8, 8)]);
        assert!(board.is_winning());
    }

    #[test]
    fn test_incomplete_line_never_wins() {
        // 7 + 8 = 15 only with a phantom zero; the empty cell must block it
        let board = board_with(&[(0, 7), (1, 8)]);
        assert!(!board.is_winning());
    }

    #[test]
    fn test_filled_line_wrong_sum_does_not_win() {
        let board = board_with(&[(0, 1), (1, 2), (2, 3)]);
        assert!(!board.is_winning());
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = board_with(&[(0, 1)]);
        let next = board.with_move(Action::new(4, 2));

        assert_eq!(board.cell(4), None);
        assert_eq!(next.cell(4), Some(2));
        assert_eq!(next.cell(0), Some(1));
    }

    #[test]
    fn test_place_adds_exactly_one_cell() {
        let board = board_with(&[(0, 1), (1, 2)]);
        let next = board.with_move(Action::new(7, 9));

        assert_eq!(next.filled_count(), board.filled_count() + 1);
        for position in 0..CELL_COUNT {
            if position != 7 {
                assert_eq!(next.cell(position), board.cell(position));
            }
        }
    }

    #[test]
    fn test_uses_value() {
        let board = board_with(&[(3, 5)]);

        assert!(board.uses_value(5));
        assert!(!board.uses_value(4));
    }

    #[test]
    fn test_display_grid() {
        let board = board_with(&[(0, 1), (4, 2), (8, 9)]);
        assert_eq!(format!("{}", board), "1 . .\n. 2 .\n. . 9");
    }

    #[test]
    fn test_board_serde() {
        let board = board_with(&[(0, 1), (7, 9)]);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
