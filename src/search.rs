//! Two-player adversarial search.
//!
//! The [`Game`] trait is the seam between the Pentago core and any search
//! algorithm: the conventional negamax protocol of enumerating moves,
//! applying one, recursing, and undoing it. Implementations mutate a single
//! shared state in strict stack discipline instead of copying the board per
//! node.
//!
//! Two strategies are provided:
//!
//! - [`Negamax`] - depth-limited alpha-beta negamax with a transposition
//!   table, the engine opponent.
//! - [`RandomStrategy`] - uniform random over the legal moves, useful as a
//!   demo opponent and for reproducible test games.

use std::collections::HashMap;
use std::fmt;

use crate::constants::LOSS_SCORE;

/// A two-player, zero-sum, perfect-information game searched by
/// apply/undo on one owned state.
///
/// `evaluate` scores from the perspective of the player to move; terminal
/// losses must score strictly lower than any non-terminal position.
/// `is_terminal` and `evaluate` take `&mut self` so an implementation can
/// share one win-detection pass between them.
pub trait Game {
    type Move: Clone + PartialEq + fmt::Debug;

    /// All legal moves, in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;
    /// Apply a move known to be legal. Illegal input is a caller bug.
    fn apply_move(&mut self, mv: &Self::Move);
    /// Undo the most recently applied move (strict stack discipline).
    fn undo_move(&mut self, mv: &Self::Move);
    /// Whether the game is over.
    fn is_terminal(&mut self) -> bool;
    /// Score for the player to move.
    fn evaluate(&mut self) -> i32;
    /// Position key for transposition caching.
    fn key(&self) -> u128;
}

/// Chooses a move for the player whose turn it is.
pub trait Strategy<G: Game> {
    /// The move to play, or `None` when the position is terminal or has no
    /// moves.
    fn choose(&mut self, game: &mut G) -> Option<G::Move>;
}

/// How a cached value relates to the true score of its position.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

/// Transposition table entry.
struct Entry<M> {
    depth: u32,
    value: i32,
    bound: Bound,
    /// Best move found here, tried first on re-visits.
    best: Option<M>,
}

/// Depth-limited alpha-beta negamax with a transposition table.
///
/// The table persists across [`choose`](Strategy::choose) calls, so
/// positions revisited later in the game are served from cache when the
/// stored depth suffices, and otherwise still improve move ordering.
pub struct Negamax<M> {
    depth: u32,
    table: HashMap<u128, Entry<M>>,
}

impl<M: Clone + PartialEq> Negamax<M> {
    /// Create a searcher looking `depth` plies ahead.
    pub fn new(depth: u32) -> Self {
        Negamax {
            depth: depth.max(1),
            table: HashMap::new(),
        }
    }

    fn negamax<G: Game<Move = M>>(
        &mut self,
        game: &mut G,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth == 0 || game.is_terminal() {
            let score = game.evaluate();
            // Widen terminal losses by the remaining depth so a loss near
            // the root outweighs one further away; the parent's negation
            // then prefers quicker wins. Heuristic scores stay unscaled.
            return if score <= LOSS_SCORE {
                score - depth as i32
            } else {
                score
            };
        }

        let key = game.key();
        let mut table_move: Option<M> = None;
        if let Some(entry) = self.table.get(&key) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.value,
                    Bound::Lower if entry.value >= beta => return entry.value,
                    Bound::Upper if entry.value <= alpha => return entry.value,
                    _ => {}
                }
            }
            table_move = entry.best.clone();
        }

        let mut moves = game.legal_moves();
        if let Some(first) = &table_move {
            if let Some(at) = moves.iter().position(|m| m == first) {
                moves.swap(0, at);
            }
        }

        let alpha_orig = alpha;
        let mut best_value = i32::MIN + 1;
        let mut best_move = None;
        for mv in &moves {
            game.apply_move(mv);
            let value = -self.negamax(game, depth - 1, -beta, -alpha);
            game.undo_move(mv);

            if value > best_value {
                best_value = value;
                best_move = Some(mv.clone());
            }
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_value <= alpha_orig {
            Bound::Upper
        } else if best_value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.insert(
            key,
            Entry {
                depth,
                value: best_value,
                bound,
                best: best_move,
            },
        );
        best_value
    }
}

impl<G: Game> Strategy<G> for Negamax<G::Move> {
    fn choose(&mut self, game: &mut G) -> Option<G::Move> {
        if game.is_terminal() {
            return None;
        }
        let moves = game.legal_moves();

        let mut alpha = i32::MIN + 1;
        let beta = i32::MAX;
        let mut best = None;
        for mv in &moves {
            game.apply_move(mv);
            let value = -self.negamax(game, self.depth - 1, -beta, -alpha);
            game.undo_move(mv);
            if value > alpha || best.is_none() {
                alpha = value;
                best = Some(mv.clone());
            }
        }
        best
    }
}

/// Uniform random move selection, seedable for reproducible games.
pub struct RandomStrategy {
    rng: fastrand::Rng,
}

impl RandomStrategy {
    /// Randomly seeded strategy.
    pub fn new() -> Self {
        RandomStrategy {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic strategy for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose(&mut self, game: &mut G) -> Option<G::Move> {
        if game.is_terminal() {
            return None;
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.usize(..moves.len())].clone())
        }
    }
}
