//! A single 3x3 quadrant of the Pentago board.
//!
//! The quadrant is the unit of rotation: a move always places a mark
//! somewhere on the board and then rotates one quadrant 90 degrees. Cells
//! are stored row-major in a fixed array:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Rotation permutes the ring of 8 outer cells; the center cell (local
//! index 4) never moves.

use std::fmt;

use crate::constants::{CENTER_CELL, QUADRANT_CELLS, ROTATE_CCW_SOURCE, ROTATE_CW_SOURCE};

/// One of the two players. Cross moves first and renders as `x`,
/// Nought as `o`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Display symbol for this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'x',
            Player::Nought => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction of a quadrant rotation.
///
/// In the textual move encoding, clockwise is `r` and counter-clockwise
/// is `l`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// The opposite direction. Rotating by a direction and then by its
    /// reverse restores the quadrant exactly.
    pub fn reversed(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Single-letter form used in the move encoding.
    pub fn letter(self) -> char {
        match self {
            Rotation::Clockwise => 'r',
            Rotation::CounterClockwise => 'l',
        }
    }
}

/// A board cell: empty or holding one player's mark.
pub type Cell = Option<Player>;

/// A 3x3 quadrant, stored as a fixed row-major array of cells.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Quadrant {
    cells: [Cell; QUADRANT_CELLS],
}

impl Quadrant {
    /// Create an empty quadrant.
    pub fn new() -> Self {
        Quadrant::default()
    }

    /// The cell at `local` (0..8).
    ///
    /// # Panics
    /// Panics if `local` is out of range.
    pub fn cell(&self, local: usize) -> Cell {
        self.cells[local]
    }

    /// Write `cell` at `local` (0..8).
    ///
    /// This is a raw write: an occupied cell is overwritten without
    /// complaint, and writing `None` clears the cell (which is how undo
    /// removes a mark). Move legality, including occupancy, is enforced by
    /// [`Board::place`](crate::board::Board::place); callers generating
    /// moves should consult [`available_positions`](Self::available_positions).
    ///
    /// # Panics
    /// Panics if `local` is out of range.
    pub fn place(&mut self, cell: Cell, local: usize) {
        self.cells[local] = cell;
    }

    /// Rotate the quadrant 90 degrees in the given direction.
    ///
    /// The permutation is taken from the fixed source tables; applying a
    /// rotation and then its reverse, or the same direction four times,
    /// restores the original arrangement bit-for-bit.
    pub fn rotate(&mut self, rotation: Rotation) {
        let source = match rotation {
            Rotation::Clockwise => &ROTATE_CW_SOURCE,
            Rotation::CounterClockwise => &ROTATE_CCW_SOURCE,
        };
        let old = self.cells;
        self.cells = std::array::from_fn(|i| old[source[i]]);
    }

    /// Local indices of empty cells, in ascending order.
    ///
    /// The ordering is load-bearing: it fixes move-generation order, and
    /// with it the search's move ordering, so games are reproducible.
    pub fn available_positions(&self) -> Vec<usize> {
        (0..QUADRANT_CELLS)
            .filter(|&i| self.cells[i].is_none())
            .collect()
    }

    /// Local indices held by `player`, in ascending order.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        (0..QUADRANT_CELLS).filter(move |&i| self.cells[i] == Some(player))
    }

    /// Whether `player` holds the center cell. The center never moves under
    /// rotation, which makes it the one stable foothold in a quadrant; the
    /// scoring heuristic rewards holding it.
    pub fn center_held_by(&self, player: Player) -> bool {
        self.cells[CENTER_CELL] == Some(player)
    }

    /// Render one row (0..2) of the quadrant as `"x _ o"`-style text.
    pub fn line(&self, row: usize) -> String {
        let start = row * 3;
        (start..start + 3)
            .map(|i| match self.cells[i] {
                Some(p) => p.symbol(),
                None => '_',
            })
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
