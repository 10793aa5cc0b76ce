//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Progress bar for lives, e.g. `♥♥♡` for 2 of 3.
pub fn lives_bar(lives: u8, max: u8) -> String {
    let full = lives.min(max) as usize;
    let empty = max.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(full), "♡".repeat(empty))
}
