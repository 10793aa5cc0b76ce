//! `pick` command: consecutive items from a level's starting position.

use crate::error::CliError;
use crate::io_utils::split_items;
use lumo_engine::selector::{cycle_pick, level_index};
use std::io::Write;

pub fn handle_pick_command(
    level: i64,
    count: usize,
    items: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let items = split_items(items);
    if items.is_empty() {
        return Err(CliError::InvalidInput("at least one item is required".into()));
    }
    writeln!(out, "start: {}", level_index(level, items.len()))?;
    writeln!(out, "picked: {}", cycle_pick(&items, level, count).join(" "))?;
    Ok(())
}
