//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "level": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "level": { "value": config.level, "source": sources.level },
        "max_level": { "value": config.max_level, "source": sources.max_level },
        "lives": { "value": config.lives, "source": sources.lives },
        "options": { "value": config.options, "source": sources.options },
        "history": { "value": config.history, "source": sources.history },
        "step_seed": { "value": config.step_seed, "source": sources.step_seed },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
