//! Pentago-Rust: a Pentago board-game engine.
//!
//! This crate reimplements a Pentago engine in Rust: a 6x6 board of four
//! rotatable 3x3 quadrants, where each move places a mark and then twists a
//! quadrant, and five in a row wins. The game core exposes the
//! apply/undo/terminal/score protocol a two-player adversarial search
//! consumes, and ships a negamax searcher with a transposition table.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, the winning-combination table, and
//!   search parameters
//! - [`quadrant`] - Players, rotations, and the 3x3 quadrant
//! - [`board`] - The composed 6x6 board and the textual move encoding
//! - [`game`] - Game state: apply/undo, win detection, scoring
//! - [`search`] - The search seam (`Game`, `Strategy`) and the negamax and
//!   random strategies
//! - [`console`] - Interactive console matches
//!
//! ## Example
//!
//! ```
//! use pentago_rust::board::Move;
//! use pentago_rust::game::Pentago;
//! use pentago_rust::search::{Negamax, Strategy};
//!
//! // Start a game and play a textual move: place on position 14,
//! // rotate quadrant 1 clockwise.
//! let mut game = Pentago::new();
//! let mv: Move = "14 1 r".parse().unwrap();
//! game.play(&mv).unwrap();
//!
//! // Ask the engine for a reply.
//! let mut engine: Negamax<Move> = Negamax::new(2);
//! let reply = engine.choose(&mut game).unwrap();
//! game.play(&reply).unwrap();
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod quadrant;
pub mod search;
