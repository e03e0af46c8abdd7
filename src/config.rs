//! Plugin configuration.
//!
//! Every field is optional. A host that passes nothing (or passes keys this
//! plugin does not know) gets `Cargo.toml` and `cargo build --release`.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default manifest path, relative to the release directory
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Default release build command
pub const DEFAULT_BUILD_COMMAND: [&str; 3] = ["cargo", "build", "--release"];

/// Configuration accepted by both lifecycle hooks
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PluginConfig {
    /// Manifest path relative to the release directory
    pub manifest: Option<PathBuf>,
    /// Build program followed by its arguments
    pub build_command: Option<Vec<String>>,
}

impl PluginConfig {
    /// Load a plugin config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded plugin config from {}", path.display());
        Ok(config)
    }

    /// Manifest path, falling back to `Cargo.toml`
    pub fn manifest_path(&self) -> &Path {
        self.manifest
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_MANIFEST))
    }

    /// Build command, falling back to `cargo build --release`
    pub fn build_command(&self) -> Vec<String> {
        match &self.build_command {
            Some(command) => command.clone(),
            None => DEFAULT_BUILD_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.manifest_path(), Path::new("Cargo.toml"));
        assert_eq!(config.build_command(), vec!["cargo", "build", "--release"]);
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.toml");
        std::fs::write(
            &path,
            "manifest = \"crates/app/Cargo.toml\"\nbuild_command = [\"make\", \"dist\"]\nassets = [\"x\"]\n",
        )
        .unwrap();

        let config = PluginConfig::load(&path).expect("config should load");
        assert_eq!(config.manifest_path(), Path::new("crates/app/Cargo.toml"));
        assert_eq!(config.build_command(), vec!["make", "dist"]);
    }

    #[test]
    fn test_load_rejects_wrong_types() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.toml");
        std::fs::write(&path, "build_command = \"cargo build\"\n").unwrap();

        let err = PluginConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid plugin config"));
    }
}
