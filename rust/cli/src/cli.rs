//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use lumo_engine::challenge::GameKind;
use lumo_engine::errors::EngineError;

#[derive(Debug, Parser)]
#[command(
    name = "lumo",
    version,
    about = "Lumo quiz CLI: deterministic question selection for learning games"
)]
pub struct LumoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Position of a level within a list of LENGTH items
    Index {
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
        #[arg(long)]
        length: usize,
        /// Use the full-cycle order instead of the sequential one
        #[arg(long)]
        unique: bool,
        /// Step seed for --unique (defaults to the configured step seed)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Read COUNT consecutive items starting at the level's position
    Pick {
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
        #[arg(long)]
        count: usize,
        /// Candidate items (space or comma separated)
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },
    /// Rotate items left by a number of positions
    Rotate {
        #[arg(long, allow_negative_numbers = true)]
        by: i64,
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },
    /// Deterministic number in [MIN, MAX) for a level and salt
    Number {
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        /// Integer or text salt
        #[arg(long, allow_hyphen_values = true)]
        salt: Option<String>,
    },
    /// Show the question for a game level
    Quiz {
        #[arg(long, value_parser = parse_game)]
        game: GameKind,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        level: Option<u32>,
        /// Print the question as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a game session, answering on stdin
    Play {
        #[arg(long, value_parser = parse_game)]
        game: GameKind,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        level: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        lives: Option<u8>,
    },
    /// Check selector properties over sampled levels
    Verify {
        /// Modulus for the full-cycle check
        #[arg(long, default_value_t = 26, value_parser = clap::value_parser!(u64).range(1..=1_000_000))]
        modulus: u64,
        /// Step seed (defaults to the configured step seed)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000)]
        samples: u32,
        /// Seed for level sampling (random when omitted)
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Display resolved configuration
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Index { .. } => "index",
            Commands::Pick { .. } => "pick",
            Commands::Rotate { .. } => "rotate",
            Commands::Number { .. } => "number",
            Commands::Quiz { .. } => "quiz",
            Commands::Play { .. } => "play",
            Commands::Verify { .. } => "verify",
            Commands::Cfg => "cfg",
        }
    }
}

fn parse_game(raw: &str) -> Result<GameKind, String> {
    raw.parse().map_err(|e: EngineError| e.to_string())
}
