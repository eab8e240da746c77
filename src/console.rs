//! Interactive console matches.
//!
//! Runs a game turn by turn on stdin/stdout: prints the positions hint
//! table and the board, prompts humans for moves in the textual encoding,
//! announces engine moves, and reports the result. Each seat is either a
//! human or an injected [`Strategy`], so the same loop drives human-vs-engine
//! and engine-vs-engine games.
//!
//! ## Example session
//!
//! ```text
//! Your move (e.g. 14 1 r, or quit): 14 1 r
//! Player o plays 23 2 l
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::board::Move;
use crate::game::Pentago;
use crate::quadrant::Player;
use crate::search::Strategy;

/// Position numbering printed before each turn, 1-based to match the move
/// encoding.
const POSITION_HINTS: &str = "\
Positions hint:

 1  2  3 | 10 11 12
 4  5  6 | 13 14 15
 7  8  9 | 16 17 18
--------------------
19 20 21 | 28 29 30
22 23 24 | 31 32 33
25 26 27 | 34 35 36

Example move: 14 1 r
Places a mark on position 14, and rotates quadrant 1 to the right
";

/// Who controls a seat.
pub enum Seat {
    /// Moves are read from the console.
    Human,
    /// Moves come from a search strategy.
    Engine(Box<dyn Strategy<Pentago>>),
}

/// Outcome of a finished (or aborted) match.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The named player has no answer to a completed winning pattern.
    Loss(Player),
    /// The board filled up with no winner.
    Draw,
    /// The human quit or stdin closed.
    Aborted,
}

/// A console match between two seats.
pub struct ConsoleMatch {
    game: Pentago,
    seats: [Seat; 2],
}

impl ConsoleMatch {
    /// Cross is seated first and moves first.
    pub fn new(cross: Seat, nought: Seat) -> Self {
        ConsoleMatch {
            game: Pentago::new(),
            seats: [cross, nought],
        }
    }

    fn seat_index(player: Player) -> usize {
        match player {
            Player::Cross => 0,
            Player::Nought => 1,
        }
    }

    /// Drive the match to its end, reading from `input` and writing to
    /// `output`. Returns the outcome after printing it.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Outcome> {
        loop {
            writeln!(output, "{POSITION_HINTS}")?;
            writeln!(output, "{}", self.game.board())?;

            if self.game.is_terminal() {
                let loser = self.game.current_player();
                let outcome = if self.game.has_winner(loser.opponent()) {
                    writeln!(output, "Player {loser} loses")?;
                    Outcome::Loss(loser)
                } else {
                    writeln!(output, "No moves remain: draw")?;
                    Outcome::Draw
                };
                return Ok(outcome);
            }

            let mover = self.game.current_player();
            let mv = match &mut self.seats[Self::seat_index(mover)] {
                Seat::Human => match prompt_move(&mut self.game, input, output)? {
                    Some(mv) => mv,
                    None => {
                        writeln!(output, "Game aborted")?;
                        return Ok(Outcome::Aborted);
                    }
                },
                Seat::Engine(strategy) => {
                    let mv = strategy
                        .choose(&mut self.game)
                        .context("engine found no move in a non-terminal position")?;
                    writeln!(output, "Player {mover} plays {mv}")?;
                    mv
                }
            };

            // Strategies only propose legal moves and human input was
            // validated, so a rejection here is a bug worth surfacing.
            self.game
                .play(&mv)
                .with_context(|| format!("move {mv} was rejected"))?;
        }
    }
}

/// Prompt until the human enters a legal move. Returns `None` on `quit` or
/// end of input.
fn prompt_move<R: BufRead, W: Write>(
    game: &mut Pentago,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Move>> {
    loop {
        write!(
            output,
            "Player {} to move (e.g. 14 1 r, or quit): ",
            game.current_player()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading move")? == 0 {
            return Ok(None); // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        // Validate against the current position without mutating it.
        match game.play(&mv) {
            Ok(()) => {
                game.undo(&mv);
                return Ok(Some(mv));
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Negamax, RandomStrategy};
    use std::io::Cursor;

    #[test]
    fn test_engine_vs_engine_finishes() {
        let mut game = ConsoleMatch::new(
            Seat::Engine(Box::new(Negamax::new(1))),
            Seat::Engine(Box::new(RandomStrategy::with_seed(5))),
        );
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let outcome = game.run(&mut input, &mut output).unwrap();
        assert_ne!(outcome, Outcome::Aborted);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Positions hint:"));
        assert!(transcript.contains("plays"));
    }

    #[test]
    fn test_human_quit_aborts() {
        let mut game = ConsoleMatch::new(
            Seat::Human,
            Seat::Engine(Box::new(RandomStrategy::with_seed(1))),
        );
        let mut input = Cursor::new(b"quit\n".to_vec());
        let mut output = Vec::new();
        let outcome = game.run(&mut input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[test]
    fn test_human_bad_input_reprompts() {
        let mut game = ConsoleMatch::new(
            Seat::Human,
            Seat::Engine(Box::new(RandomStrategy::with_seed(1))),
        );
        // Malformed, out-of-range, then quit.
        let mut input = Cursor::new(b"nonsense\n37 1 r\nquit\n".to_vec());
        let mut output = Vec::new();
        let outcome = game.run(&mut input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("expected move format"));
        assert!(transcript.contains("invalid position '37'"));
    }

    #[test]
    fn test_human_move_is_applied() {
        let mut game = ConsoleMatch::new(
            Seat::Human,
            Seat::Engine(Box::new(RandomStrategy::with_seed(9))),
        );
        let mut input = Cursor::new(b"14 1 r\nquit\n".to_vec());
        let mut output = Vec::new();
        let outcome = game.run(&mut input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
        let transcript = String::from_utf8(output).unwrap();
        // The engine announced a reply, so the human move went through.
        assert!(transcript.contains("Player o plays"));
    }
}
