//! Constants for board geometry, win detection, and search parameters.
//!
//! The board is a 6x6 grid composed of four 3x3 quadrants. Cells are
//! addressed by a global index 0..35; global index `g` lives in quadrant
//! `g / 9` at local index `g % 9`. The textual move encoding used at the
//! console is 1-based (positions 1..36, quadrants 1..4), matching the hints
//! table printed before each turn.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of quadrants composing the board.
pub const QUADRANT_COUNT: usize = 4;

/// Number of cells per quadrant (3x3, row-major).
pub const QUADRANT_CELLS: usize = 9;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = QUADRANT_COUNT * QUADRANT_CELLS;

/// Local index of a quadrant's center cell, invariant under rotation.
pub const CENTER_CELL: usize = 4;

// =============================================================================
// Rotation Permutations
// =============================================================================

/// Clockwise rotation source table: after rotating, local cell `i` holds the
/// mark previously at local cell `ROTATE_CW_SOURCE[i]`.
pub const ROTATE_CW_SOURCE: [usize; QUADRANT_CELLS] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Counter-clockwise rotation source table, the exact inverse of
/// [`ROTATE_CW_SOURCE`].
pub const ROTATE_CCW_SOURCE: [usize; QUADRANT_CELLS] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default negamax search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Score reported by a player who has just lost. Any non-terminal heuristic
/// value must be strictly greater than this.
pub const LOSS_SCORE: i32 = -100;

// =============================================================================
// Winning Combinations
// =============================================================================

/// The fixed table of winning line patterns, as 0-based global indices.
///
/// A player wins when their held positions are a superset of any one entry.
/// Some entries carry 6 cells because a line can be completed two overlapping
/// ways; membership is subset-based, so the order of cells inside an entry
/// does not matter.
pub const WIN_COMBINATIONS: [&[usize]; 32] = [
    // Horizontal lines, upper board half
    &[0, 1, 2, 9, 10],
    &[1, 2, 9, 10, 11],
    &[3, 4, 5, 12, 13],
    &[4, 5, 12, 13, 14],
    &[6, 7, 8, 15, 16, 17],
    &[7, 8, 15, 16, 17],
    // Horizontal lines, lower board half
    &[18, 19, 20, 27, 28],
    &[19, 20, 27, 28, 29],
    &[21, 22, 23, 30, 31],
    &[22, 23, 30, 31, 32],
    &[24, 25, 26, 33, 34],
    &[25, 26, 33, 34, 35],
    // Vertical lines, left board half
    &[0, 3, 6, 18, 21, 24],
    &[3, 6, 18, 21, 24],
    &[1, 4, 7, 19, 22, 25],
    &[4, 7, 19, 22, 25],
    &[2, 5, 8, 20, 23],
    &[5, 8, 20, 23, 26],
    // Vertical lines, right board half
    &[9, 12, 15, 27, 30],
    &[12, 15, 27, 30, 33],
    &[10, 13, 16, 28, 31],
    &[13, 16, 28, 31, 34],
    &[11, 14, 17, 29, 32],
    &[14, 17, 29, 32, 35],
    // Diagonals
    &[3, 7, 20, 30, 34],
    &[0, 4, 8, 27, 31],
    &[4, 8, 27, 31, 35],
    &[1, 5, 15, 28, 32],
    &[21, 19, 8, 12, 10],
    &[24, 22, 20, 15, 13],
    &[22, 20, 15, 13, 11],
    &[25, 23, 27, 16, 14],
];
