//! Pentago game state: turn tracking, move application and undo, win
//! detection, and scoring.
//!
//! A move places the mover's mark and then rotates a quadrant, with one
//! exception carried from the original rules of this engine: a placement
//! that already completes a winning pattern ends the game immediately and
//! the mandatory twist is skipped. Undo reverses the same two steps in the
//! opposite order, restoring the board bit-identically, so a tree search
//! can explore and backtrack on a single state without copying the board
//! per node. The search must keep strict stack discipline (last move
//! applied, first undone); that precondition is not checked at runtime.

use crate::board::{Board, Move, MoveError};
use crate::constants::{LOSS_SCORE, QUADRANT_CELLS, QUADRANT_COUNT, WIN_COMBINATIONS};
use crate::quadrant::Player;
use crate::search::Game;

/// A Pentago game in progress.
#[derive(Clone, Debug)]
pub struct Pentago {
    board: Board,
    current: Player,
    /// Set when the last placement completed a winning pattern, in which
    /// case that move's rotation step never happened and undo must skip it
    /// too. A single flag suffices: a won state is terminal, so the search
    /// never stacks a second move on top of it.
    won_before_rotation: bool,
    /// Cached did-the-player-to-move-lose result, so the terminal check and
    /// the scoring step agree on one evaluation per ply instead of scanning
    /// the combination table twice.
    to_move_has_lost: Option<bool>,
}

impl Default for Pentago {
    fn default() -> Self {
        Self::new()
    }
}

impl Pentago {
    /// Start a new game. Cross moves first.
    pub fn new() -> Self {
        Pentago {
            board: Board::new(),
            current: Player::Cross,
            won_before_rotation: false,
            to_move_has_lost: None,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Whether the last placement won before its rotation was applied.
    pub fn won_before_rotation(&self) -> bool {
        self.won_before_rotation
    }

    /// Apply `mv` for the player to move.
    ///
    /// All validation happens before any mutation: the quadrant index is
    /// checked first, then placement checks position range and occupancy.
    /// On success the mark is placed; if the placement completes a winning
    /// pattern the rotation is skipped and the game is over, otherwise the
    /// chosen quadrant is rotated. Either way the turn passes.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        if mv.quadrant >= QUADRANT_COUNT {
            return Err(MoveError::QuadrantOutOfRange(mv.quadrant));
        }
        self.board.place(self.current, mv.position)?;
        if self.has_winner(self.current) {
            self.won_before_rotation = true;
        } else {
            self.board.rotate_quadrant_unchecked(mv.quadrant, mv.rotation);
        }
        self.to_move_has_lost = None;
        self.current = self.current.opponent();
        Ok(())
    }

    /// Undo `mv`, which must be the most recently applied move.
    ///
    /// Exact inverse of [`play`](Self::play): if the move won before
    /// rotating, only the placement is undone; otherwise the rotation is
    /// reversed first, then the placed cell is cleared.
    pub fn undo(&mut self, mv: &Move) {
        if self.won_before_rotation {
            self.won_before_rotation = false;
        } else {
            self.board
                .rotate_quadrant_unchecked(mv.quadrant, mv.rotation.reversed());
        }
        self.board.clear(mv.position);
        self.to_move_has_lost = None;
        self.current = self.current.opponent();
    }

    /// Whether `player`'s held positions cover one of the fixed winning
    /// combinations.
    pub fn has_winner(&self, player: Player) -> bool {
        let held = self.board.positions_of(player);
        WIN_COMBINATIONS
            .iter()
            .any(|combo| combo.iter().all(|cell| held.binary_search(cell).is_ok()))
    }

    /// Whether the game is over: the opponent of the player to move holds a
    /// winning pattern, the last placement won before rotating, or no
    /// cell is left to play.
    pub fn is_terminal(&mut self) -> bool {
        let lost = self.has_winner(self.current.opponent());
        self.to_move_has_lost = Some(lost);
        lost || self.won_before_rotation || !self.board.has_open_position()
    }

    /// Score the position for the player to move.
    ///
    /// A lost position scores [`LOSS_SCORE`]; anything else scores the
    /// center-control differential (quadrant centers held by the player to
    /// move minus those held by the opponent, so the heuristic is symmetric
    /// between the seats). The differential is bounded by the quadrant
    /// count, keeping every non-terminal score strictly above a loss.
    /// Consumes the loss result cached by [`is_terminal`](Self::is_terminal)
    /// when one is present.
    pub fn evaluate(&mut self) -> i32 {
        let lost = match self.to_move_has_lost.take() {
            Some(lost) => lost,
            None => self.has_winner(self.current.opponent()),
        };
        if lost {
            LOSS_SCORE
        } else {
            self.center_score()
        }
    }

    fn center_score(&self) -> i32 {
        let mut score = 0;
        for q in 0..QUADRANT_COUNT {
            let quadrant = self.board.quadrant(q);
            if quadrant.center_held_by(self.current) {
                score += 1;
            } else if quadrant.center_held_by(self.current.opponent()) {
                score -= 1;
            }
        }
        score
    }

    /// Transposition key: every cell packed at 2 bits into a `u128`.
    ///
    /// The player to move is implied: each move places exactly one mark,
    /// so turn parity follows from the mark count.
    pub fn key(&self) -> u128 {
        let mut key = 0u128;
        for quadrant in 0..QUADRANT_COUNT {
            for local in 0..QUADRANT_CELLS {
                let bits = match self.board.quadrant(quadrant).cell(local) {
                    None => 0u128,
                    Some(Player::Cross) => 1,
                    Some(Player::Nought) => 2,
                };
                key = (key << 2) | bits;
            }
        }
        key
    }
}

impl Game for Pentago {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    fn apply_move(&mut self, mv: &Move) {
        let applied = self.play(mv);
        debug_assert!(applied.is_ok(), "apply_move called with illegal move {mv}");
    }

    fn undo_move(&mut self, mv: &Move) {
        self.undo(mv);
    }

    fn is_terminal(&mut self) -> bool {
        Pentago::is_terminal(self)
    }

    fn evaluate(&mut self) -> i32 {
        Pentago::evaluate(self)
    }

    fn key(&self) -> u128 {
        Pentago::key(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrant::Rotation;

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    /// Alternate placements so Cross lands on `cross` in order; Nought is
    /// parked on the given filler cells. Rotations all target quadrant 4
    /// counter-clockwise so the upper half stays put (the tests pick upper
    /// cells only).
    fn fill(cross: &[usize], nought: &[usize]) -> Pentago {
        let mut game = Pentago::new();
        for (i, &position) in cross.iter().enumerate() {
            game.play(&Move {
                position,
                quadrant: 3,
                rotation: Rotation::CounterClockwise,
            })
            .unwrap();
            if !game.won_before_rotation() {
                if let Some(&position) = nought.get(i) {
                    game.play(&Move {
                        position,
                        quadrant: 3,
                        rotation: Rotation::CounterClockwise,
                    })
                    .unwrap();
                }
            }
        }
        game
    }

    #[test]
    fn test_first_combination_wins() {
        // 0-based {0, 1, 2, 9, 10} is the first listed combination.
        let game = fill(&[0, 1, 2, 9, 10], &[18, 19, 20, 21]);
        assert!(game.has_winner(Player::Cross));
        assert!(!game.has_winner(Player::Nought));
    }

    #[test]
    fn test_partial_line_is_no_win() {
        let game = fill(&[0, 1, 2, 9], &[18, 19, 20, 21]);
        assert!(!game.has_winner(Player::Cross));
    }

    #[test]
    fn test_winning_placement_skips_rotation() {
        let mut game = fill(&[0, 1, 2, 9], &[18, 19, 20, 21]);
        let before = game.board().clone();
        // Winning placement asks for a quadrant 1 twist that must not land.
        game.play(&mv("11 1 r")).unwrap();
        assert!(game.won_before_rotation());
        let mut expected = before;
        expected.place(Player::Cross, 10).unwrap();
        assert_eq!(game.board(), &expected);
    }

    #[test]
    fn test_play_undo_restores_board() {
        let mut game = Pentago::new();
        game.play(&mv("14 1 r")).unwrap();
        game.play(&mv("3 2 l")).unwrap();

        let board = game.board().clone();
        let key = game.key();
        let player = game.current_player();

        let probe = mv("20 3 r");
        game.play(&probe).unwrap();
        assert_ne!(game.key(), key);
        game.undo(&probe);

        assert_eq!(game.board(), &board);
        assert_eq!(game.key(), key);
        assert_eq!(game.current_player(), player);
    }

    #[test]
    fn test_undo_after_winning_placement() {
        let mut game = fill(&[0, 1, 2, 9], &[18, 19, 20, 21]);
        let board = game.board().clone();
        let winning = mv("11 1 r");
        game.play(&winning).unwrap();
        game.undo(&winning);
        assert!(!game.won_before_rotation());
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), Player::Cross);
    }

    #[test]
    fn test_play_rejects_occupied() {
        let mut game = Pentago::new();
        game.play(&mv("5 1 r")).unwrap();
        let before = game.board().clone();
        assert_eq!(game.play(&mv("5 2 l")), Err(MoveError::Occupied(4)));
        // Rejected before mutating: board unchanged, still Cross's mark.
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::Cross);
    }

    #[test]
    fn test_play_rejects_bad_quadrant_before_placing() {
        let mut game = Pentago::new();
        let bad = Move {
            position: 0,
            quadrant: 4,
            rotation: Rotation::Clockwise,
        };
        assert_eq!(game.play(&bad), Err(MoveError::QuadrantOutOfRange(4)));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_terminal_and_score_after_win() {
        let mut game = fill(&[0, 1, 2, 9, 10], &[18, 19, 20, 21]);
        // Nought is to move and has lost.
        assert_eq!(game.current_player(), Player::Nought);
        assert!(game.is_terminal());
        assert_eq!(game.evaluate(), LOSS_SCORE);
    }

    #[test]
    fn test_fresh_game_not_terminal() {
        let mut game = Pentago::new();
        assert!(!game.is_terminal());
        assert_eq!(game.evaluate(), 0);
    }

    #[test]
    fn test_center_score_is_symmetric() {
        let mut game = Pentago::new();
        game.play(&mv("5 4 l")).unwrap(); // Cross takes quadrant 0 center
        assert_eq!(game.current_player(), Player::Nought);
        assert_eq!(game.evaluate(), -1);
        game.play(&mv("14 4 l")).unwrap(); // Nought takes quadrant 1 center
        assert_eq!(game.current_player(), Player::Cross);
        assert_eq!(game.evaluate(), 0);
    }

    #[test]
    fn test_key_distinguishes_positions() {
        let mut a = Pentago::new();
        a.play(&mv("1 4 l")).unwrap();
        let mut b = Pentago::new();
        b.play(&mv("2 4 l")).unwrap();
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), Pentago::new().key());
    }
}
