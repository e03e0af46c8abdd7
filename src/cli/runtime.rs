//! Runtime configuration resolved from command line arguments.

use super::{Args, OutputManager};
use crate::config::PluginConfig;
use crate::error::Result;
use anyhow::Context;
use std::path::PathBuf;

/// Everything a hook command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Terminal output, also the hooks' logger
    pub output: OutputManager,
    /// Plugin config with CLI overrides applied
    pub plugin: PluginConfig,
    /// Release directory from `--cwd`, if given
    pub cwd: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Load the plugin config file (if any) and apply CLI overrides
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut plugin = match &args.config {
            Some(path) => PluginConfig::load(path)?,
            None => PluginConfig::default(),
        };

        if let Some(manifest) = &args.manifest {
            plugin.manifest = Some(manifest.clone());
        }

        Ok(Self {
            output: OutputManager::new(args.quiet),
            plugin,
            cwd: args.cwd.clone(),
        })
    }

    /// Release directory: `--cwd`, then `fallback` (e.g. the context's cwd), then the process cwd
    pub fn release_dir(&self, fallback: Option<PathBuf>) -> Result<PathBuf> {
        match self.cwd.clone().or(fallback) {
            Some(dir) => Ok(dir),
            None => Ok(std::env::current_dir()
                .context("Failed to determine the release directory")?),
        }
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }
}
