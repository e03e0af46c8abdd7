//! Command line argument parsing.
//!
//! Each lifecycle hook is a subcommand, so a release pipeline can call
//! `semantic_release_cargo verify-conditions` and
//! `semantic_release_cargo prepare --next-version ${nextRelease.version}`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// semantic-release hooks for Cargo projects
#[derive(Parser, Debug)]
#[command(
    name = "semantic_release_cargo",
    version,
    about = "semantic-release hooks for Cargo projects",
    long_about = "Bump the Cargo.toml version and build the release binary from a release pipeline.

Usage:
  semantic_release_cargo verify-conditions
  semantic_release_cargo prepare --next-version 1.4.0
  semantic_release_cargo prepare --context context.json
  semantic_release_cargo --config release.toml prepare --next-version 1.4.0"
)]
pub struct Args {
    /// Release directory (defaults to the current directory)
    #[arg(long, global = true, env = "SEMANTIC_RELEASE_CWD", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Plugin config file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Manifest path relative to the release directory
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Lifecycle hook to run
    #[command(subcommand)]
    pub command: Command,
}

/// Lifecycle hooks
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that the manifest exists
    VerifyConditions,

    /// Write the next version into the manifest and build the release binary
    Prepare {
        /// Version of the release being prepared
        #[arg(
            long,
            env = "NEXT_RELEASE_VERSION",
            value_name = "VERSION",
            conflicts_with = "context"
        )]
        next_version: Option<String>,

        /// Release context JSON file (`-` reads stdin)
        #[arg(long, value_name = "FILE")]
        context: Option<PathBuf>,
    },
}

impl Command {
    /// Hook name as the host pipeline knows it
    pub fn name(&self) -> &'static str {
        match self {
            Command::VerifyConditions => "verifyConditions",
            Command::Prepare { .. } => "prepare",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
