//! Command-line interface for tune-scout.
//!
//! Provides commands for searching the song catalog, running a full
//! recommendation cycle against the user's pod, and listing prior
//! checkpoints.

mod commands;

pub use commands::{Cli, Commands, run_command};
