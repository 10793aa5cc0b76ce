//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! an error to exit code `2` after printing it.

use crate::config::ConfigError;
use lumo_engine::errors::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// A property check in `verify` did not hold
    #[error("Verification failed: {0}")]
    Verification(String),
}
