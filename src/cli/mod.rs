//! Command line interface for semantic_release_cargo.
//!
//! Exposes each lifecycle hook as a subcommand for pipelines that run
//! plugins as external commands.

mod args;
pub mod commands;
mod output;
mod runtime;

pub use args::{Args, Command};
pub use commands::execute_command;
pub use output::OutputManager;
pub use runtime::RuntimeConfig;

use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args)
}
