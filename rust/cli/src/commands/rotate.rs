//! `rotate` command: left rotation of an item list.

use crate::error::CliError;
use crate::io_utils::split_items;
use lumo_engine::selector::rotate_array;
use std::io::Write;

pub fn handle_rotate_command(by: i64, items: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let items = split_items(items);
    writeln!(out, "rotated: {}", rotate_array(&items, by).join(" "))?;
    Ok(())
}
