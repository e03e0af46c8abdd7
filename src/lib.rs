//! # semantic_release_cargo
//!
//! semantic-release lifecycle hooks for Cargo projects.
//!
//! [`ReleasePreparer`] implements two hooks:
//!
//! - **verifyConditions**: fails the release when `Cargo.toml` is missing.
//! - **prepare**: writes the next version into the first `version = "..."`
//!   line of `Cargo.toml`, then runs `cargo build --release`. A failed build
//!   is logged and does not fail the release.
//!
//! ## Usage
//!
//! ```bash
//! semantic_release_cargo verify-conditions
//! semantic_release_cargo prepare --next-version 1.4.0
//! semantic_release_cargo prepare --context context.json
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod build;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod plugin;
pub mod version;

// Re-export main types for public API
pub use build::BuildCommand;
pub use cli::Args;
pub use config::PluginConfig;
pub use context::{HostContext, Logger, NextRelease, ReleaseContext};
pub use error::{BuildError, PreconditionError, ReleaseError, Result};
pub use plugin::{PrepareOutcome, ReleasePreparer};
pub use version::{VersionLinePatch, set_version_line, update_manifest_version};
