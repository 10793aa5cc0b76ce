//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: runs the `lumo` binary with arguments, environment and
//!   stdin, capturing exit code, stdout and stderr.
//! - `temp_files`: scratch directory for config files, removed on drop.

pub mod cli_runner;
pub mod temp_files;
