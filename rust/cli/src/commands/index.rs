//! `index` command: sequential or full-cycle position of a level.

use crate::config;
use crate::error::CliError;
use lumo_engine::selector::{coprime_step, level_index, unique_index};
use std::io::Write;

/// Prints `level_index(level, length)`, or with `unique` the full-cycle
/// `unique_index(level, length, seed)` together with the step it walks by.
pub fn handle_index_command(
    level: i64,
    length: usize,
    unique: bool,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !unique {
        writeln!(out, "index: {}", level_index(level, length))?;
        return Ok(());
    }
    let seed = match seed {
        Some(s) => s,
        None => config::load()?.step_seed,
    };
    writeln!(out, "index: {}", unique_index(level, length, seed))?;
    writeln!(out, "step: {}", coprime_step(length, seed))?;
    Ok(())
}
