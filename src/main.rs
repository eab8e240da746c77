//! Pentago-Rust: a Pentago engine with negamax search.
//!
//! ## Usage
//!
//! - `pentago-rust` - Play against the engine
//! - `pentago-rust play --depth 4` - Play against a deeper search
//! - `pentago-rust play --second` - Let the engine move first
//! - `pentago-rust demo --seed 7` - Watch the engine beat a random player

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pentago_rust::console::{ConsoleMatch, Seat};
use pentago_rust::constants::DEFAULT_DEPTH;
use pentago_rust::search::{Negamax, RandomStrategy};

/// Pentago-Rust: a Pentago engine with negamax search
#[derive(Parser)]
#[command(name = "pentago-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a console match against the engine
    Play {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Give the engine the first move
        #[arg(long)]
        second: bool,
    },
    /// Watch the engine play a seeded random opponent
    Demo {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut game = match cli.command {
        Some(Commands::Play { depth, second }) => {
            let engine = Seat::Engine(Box::new(Negamax::new(depth)));
            if second {
                ConsoleMatch::new(engine, Seat::Human)
            } else {
                ConsoleMatch::new(Seat::Human, engine)
            }
        }
        Some(Commands::Demo { depth, seed }) => ConsoleMatch::new(
            Seat::Engine(Box::new(Negamax::new(depth))),
            Seat::Engine(Box::new(RandomStrategy::with_seed(seed))),
        ),
        None => ConsoleMatch::new(
            Seat::Human,
            Seat::Engine(Box::new(Negamax::new(DEFAULT_DEPTH))),
        ),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    game.run(&mut input, &mut output)?;
    Ok(())
}
