//! `number` command: salted deterministic number for a level.

use crate::error::CliError;
use crate::ui;
use lumo_engine::selector::{number_for_level, Salt};
use std::io::Write;

pub fn handle_number_command(
    level: i64,
    min: i64,
    max: i64,
    salt: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if max <= min {
        ui::display_warning(err, &format!("empty range [{}, {}), returning min", min, max))?;
    }
    let salt = salt.map(Salt::parse).unwrap_or_default();
    writeln!(out, "number: {}", number_for_level(level, min, max, salt))?;
    Ok(())
}
