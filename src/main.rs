//! TuneScout - LLM music recommendations persisted to your Solid pod.
//!
//! Search a public song catalog, pick up to five songs, ask an LLM backend
//! for similar music, and checkpoint each recommendation cycle as Turtle
//! documents in your pod. Run `tune-scout --help` for the available
//! commands.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pod;
pub mod recommend;
pub mod session;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tune_scout=info".parse()?))
        .init();

    cli::run_command(cli)
}
