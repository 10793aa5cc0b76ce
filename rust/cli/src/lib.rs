//! # Lumo CLI Library
//!
//! Command-line front end for the Lumo quiz engine: inspect the
//! deterministic selector, render generated questions and play a session in
//! the terminal.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand, writing to the supplied output streams.
//!
//! ```
//! use std::io;
//! let args = vec!["lumo", "index", "--level", "7", "--length", "5"];
//! let code = lumo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `index`: Sequential or full-cycle position of a level in a list
//! - `pick`: Consecutive items starting at a level's position
//! - `rotate`: Left-rotate a list of items
//! - `number`: Salted deterministic number for a level
//! - `quiz`: Show the question for a game level
//! - `play`: Play a session, answering on stdin
//! - `verify`: Check selector properties over sampled levels
//! - `cfg`: Display resolved configuration

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, LumoCli};
use commands::{
    handle_cfg_command, handle_index_command, handle_number_command, handle_pick_command,
    handle_play_command, handle_quiz_command, handle_rotate_command, handle_verify_command,
};

pub use error::CliError;

/// Names of all subcommands, in help order.
pub const COMMANDS: &[&str] = &[
    "index", "pick", "rotate", "number", "quiz", "play", "verify", "cfg",
];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success (including `--help`/`--version`), `2` for
/// parse errors and failed commands.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LumoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Lumo quiz CLI");
                    write_or_exit!(err, "Usage: lumo <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: lumo --help");
                    exit_code::ERROR
                }
            };
        }
    };

    debug!(command = cli.cmd.name(), "dispatch");
    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Index {
            level,
            length,
            unique,
            seed,
        } => handle_index_command(level, length, unique, seed, out),
        Commands::Pick { level, count, items } => handle_pick_command(level, count, &items, out),
        Commands::Rotate { by, items } => handle_rotate_command(by, &items, out),
        Commands::Number {
            level,
            min,
            max,
            salt,
        } => handle_number_command(level, min, max, salt.as_deref(), out, err),
        Commands::Quiz { game, level, json } => handle_quiz_command(game, level, json, out),
        Commands::Play { game, level, lives } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(game, level, lives, out, err, &mut stdin_lock)
        }
        Commands::Verify {
            modulus,
            seed,
            samples,
            rng_seed,
        } => handle_verify_command(modulus as usize, seed, samples, rng_seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    }
}
