//! Command handler modules for the Lumo CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated via `CliError`
//!
//! The selector commands (`index`, `pick`, `rotate`, `number`) expose one
//! selector function each. `quiz` and `play` drive the game engine, `verify`
//! checks selector properties and `cfg` shows configuration.

mod cfg;
mod index;
mod number;
mod pick;
mod play;
mod quiz;
mod rotate;
mod verify;

pub use cfg::handle_cfg_command;
pub use index::handle_index_command;
pub use number::handle_number_command;
pub use pick::handle_pick_command;
pub use play::handle_play_command;
pub use quiz::handle_quiz_command;
pub use rotate::handle_rotate_command;
pub use verify::handle_verify_command;
