//! The full 6x6 board and the textual move encoding.
//!
//! A [`Board`] composes four [`Quadrant`]s, indexed 0..3. The 2x2 quadrant
//! arrangement matters only for display; win detection works on global
//! coordinates. Global cell index `g` (0..35) maps to quadrant `g / 9`,
//! local cell `g % 9`. The mapping is a bijection: every global index belongs to
//! exactly one quadrant.
//!
//! A [`Move`] is "place a mark on an empty cell, then rotate some quadrant
//! in some direction". Its textual form is 1-based, e.g. `"14 1 r"`: place
//! on position 14 and rotate quadrant 1 clockwise (`l` would be
//! counter-clockwise).

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_CELLS, QUADRANT_CELLS, QUADRANT_COUNT};
use crate::quadrant::{Cell, Player, Quadrant, Rotation};

/// An illegal move, rejected before any state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Global position index outside 0..35.
    PositionOutOfRange(usize),
    /// Quadrant index outside 0..3.
    QuadrantOutOfRange(usize),
    /// Placement targeting an already-occupied cell.
    Occupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::PositionOutOfRange(p) => {
                write!(f, "illegal move: position {} out of range", p + 1)
            }
            MoveError::QuadrantOutOfRange(q) => {
                write!(f, "illegal move: quadrant {} out of range", q + 1)
            }
            MoveError::Occupied(p) => {
                write!(f, "illegal move: position {} is occupied", p + 1)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A malformed textual move. Parsing never mutates game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Fewer than the three expected tokens.
    MissingToken,
    /// Position token is not a number in 1..=36.
    InvalidPosition(String),
    /// Quadrant token is not a number in 1..=4.
    InvalidQuadrant(String),
    /// Rotation token is neither `l` nor `r`.
    InvalidRotation(String),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::MissingToken => {
                write!(f, "expected move format: <position> <quadrant> <l|r>")
            }
            ParseMoveError::InvalidPosition(t) => {
                write!(f, "invalid position '{t}': expected a number in 1..=36")
            }
            ParseMoveError::InvalidQuadrant(t) => {
                write!(f, "invalid quadrant '{t}': expected a number in 1..=4")
            }
            ParseMoveError::InvalidRotation(t) => {
                write!(f, "invalid rotation '{t}': expected 'l' or 'r'")
            }
        }
    }
}

impl std::error::Error for ParseMoveError {}

/// A complete move: placement position, quadrant to rotate, and direction.
///
/// Stored 0-based internally; the `Display`/`FromStr` pair speaks the
/// 1-based console encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Global cell index (0..35) receiving the mark.
    pub position: usize,
    /// Quadrant index (0..3) to rotate after placing.
    pub quadrant: usize,
    /// Direction of the rotation.
    pub rotation: Rotation,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position + 1,
            self.quadrant + 1,
            self.rotation.letter()
        )
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let position = tokens.next().ok_or(ParseMoveError::MissingToken)?;
        let quadrant = tokens.next().ok_or(ParseMoveError::MissingToken)?;
        let rotation = tokens.next().ok_or(ParseMoveError::MissingToken)?;

        let position: usize = position
            .parse()
            .ok()
            .filter(|p| (1..=BOARD_CELLS).contains(p))
            .ok_or_else(|| ParseMoveError::InvalidPosition(position.to_string()))?;
        let quadrant: usize = quadrant
            .parse()
            .ok()
            .filter(|q| (1..=QUADRANT_COUNT).contains(q))
            .ok_or_else(|| ParseMoveError::InvalidQuadrant(quadrant.to_string()))?;
        let rotation = match rotation {
            "l" | "L" => Rotation::CounterClockwise,
            "r" | "R" => Rotation::Clockwise,
            other => return Err(ParseMoveError::InvalidRotation(other.to_string())),
        };

        Ok(Move {
            position: position - 1,
            quadrant: quadrant - 1,
            rotation,
        })
    }
}

/// Split a global cell index into (quadrant, local) indices.
///
/// # Panics
/// Panics if `global` is not in 0..35; validated callers use
/// [`Board::place`], which range-checks first.
pub fn split_index(global: usize) -> (usize, usize) {
    assert!(global < BOARD_CELLS);
    (global / QUADRANT_CELLS, global % QUADRANT_CELLS)
}

/// The 6x6 playing area: four quadrants addressed by global cell indices.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    quadrants: [Quadrant; QUADRANT_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// The quadrant at `index` (0..3).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn quadrant(&self, index: usize) -> &Quadrant {
        &self.quadrants[index]
    }

    /// The cell at global index `global`, or an error if out of range.
    pub fn cell(&self, global: usize) -> Result<Cell, MoveError> {
        if global >= BOARD_CELLS {
            return Err(MoveError::PositionOutOfRange(global));
        }
        let (quadrant, local) = split_index(global);
        Ok(self.quadrants[quadrant].cell(local))
    }

    /// Place `player`'s mark at `global`.
    ///
    /// Rejects out-of-range positions and occupied cells before touching
    /// any state.
    pub fn place(&mut self, player: Player, global: usize) -> Result<(), MoveError> {
        match self.cell(global)? {
            Some(_) => Err(MoveError::Occupied(global)),
            None => {
                let (quadrant, local) = split_index(global);
                self.quadrants[quadrant].place(Some(player), local);
                Ok(())
            }
        }
    }

    /// Clear the cell at `global` back to empty. Undo bookkeeping; the
    /// caller vouches that the cell is the one it previously placed.
    ///
    /// # Panics
    /// Panics if `global` is out of range.
    pub fn clear(&mut self, global: usize) {
        let (quadrant, local) = split_index(global);
        self.quadrants[quadrant].place(None, local);
    }

    /// Rotate the quadrant at `quadrant` in the given direction.
    pub fn rotate_quadrant(&mut self, quadrant: usize, rotation: Rotation) -> Result<(), MoveError> {
        self.quadrants
            .get_mut(quadrant)
            .ok_or(MoveError::QuadrantOutOfRange(quadrant))?
            .rotate(rotation);
        Ok(())
    }

    /// Rotate a quadrant whose index was already validated.
    ///
    /// # Panics
    /// Panics if `quadrant` is out of range.
    pub(crate) fn rotate_quadrant_unchecked(&mut self, quadrant: usize, rotation: Rotation) {
        self.quadrants[quadrant].rotate(rotation);
    }

    /// Global indices held by `player`, in ascending order.
    ///
    /// Each quadrant's local indices are offset by `quadrant * 9`; since
    /// quadrants are scanned in order and local indices are ascending, the
    /// result is globally ascending.
    pub fn positions_of(&self, player: Player) -> Vec<usize> {
        self.quadrants
            .iter()
            .enumerate()
            .flat_map(|(q, quadrant)| {
                quadrant
                    .positions_of(player)
                    .map(move |local| q * QUADRANT_CELLS + local)
            })
            .collect()
    }

    /// Global indices of empty cells, in ascending order.
    pub fn open_positions(&self) -> Vec<usize> {
        self.quadrants
            .iter()
            .enumerate()
            .flat_map(|(q, quadrant)| {
                quadrant
                    .available_positions()
                    .into_iter()
                    .map(move |local| q * QUADRANT_CELLS + local)
            })
            .collect()
    }

    /// Whether any cell is still empty.
    pub fn has_open_position(&self) -> bool {
        self.quadrants
            .iter()
            .any(|q| !q.available_positions().is_empty())
    }

    /// Every legal move from this board state: the cross product of empty
    /// positions, quadrant indices, and both rotation directions.
    ///
    /// Rotating the placement quadrant itself, or a quadrant the rotation
    /// leaves unchanged, is still a distinct legal move. Emission order is
    /// fixed (position ascending, then quadrant ascending, then
    /// counter-clockwise before clockwise), so move generation (and with it
    /// search behavior) is deterministic. An empty board yields
    /// 36 * 4 * 2 = 288 moves.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for position in self.open_positions() {
            for quadrant in 0..QUADRANT_COUNT {
                for rotation in [Rotation::CounterClockwise, Rotation::Clockwise] {
                    moves.push(Move {
                        position,
                        quadrant,
                        rotation,
                    });
                }
            }
        }
        moves
    }
}

impl fmt::Display for Board {
    /// Render the board as two side-by-side quadrant blocks per half:
    ///
    /// ```text
    /// x _ _ | _ _ o
    /// _ _ _ | _ x _
    /// _ o _ | _ _ _
    /// ----------------
    /// _ _ _ | _ _ _
    /// _ x _ | _ o _
    /// _ _ _ | _ _ _
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for half in [0, 2] {
            if half > 0 {
                writeln!(f, "----------------")?;
            }
            for row in 0..3 {
                writeln!(
                    f,
                    "{} | {}",
                    self.quadrants[half].line(row),
                    self.quadrants[half + 1].line(row)
                )?;
            }
        }
        Ok(())
    }
}
