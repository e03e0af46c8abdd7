//! Error types for the release lifecycle hooks.
//!
//! Fatal errors abort the host pipeline. [`BuildError`] is the one non-fatal
//! kind: `prepare` logs it and carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for semantic_release_cargo operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all semantic_release_cargo operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Lifecycle precondition not met; the host must abort the release
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Next release version errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Manifest read/write errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Plugin configuration and release context errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Conditions checked by `verifyConditions`
#[derive(Error, Debug)]
pub enum PreconditionError {
    /// The manifest file does not exist
    #[error("{} not found", .path.display())]
    ManifestNotFound {
        /// Manifest path as configured (relative to the release directory)
        path: PathBuf,
    },
}

/// Next release version errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// The host supplied no version
    #[error("nextRelease.version is empty")]
    Empty,

    /// Version parsing failed
    #[error("Failed to parse version '{version}': {source}")]
    ParseFailed {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },
}

/// Manifest file errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Reading the manifest failed
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        /// Resolved manifest path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Writing the manifest back failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        /// Resolved manifest path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// External build command failures. Logged, never propagated out of `prepare`.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The build command has no program
    #[error("Build command is empty")]
    EmptyCommand,

    /// The program could not be located on PATH
    #[error("Build program '{program}' not found: {source}")]
    ProgramNotFound {
        /// Program name
        program: String,
        /// Lookup error
        #[source]
        source: which::Error,
    },

    /// The process could not be started
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        /// Full command line
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status
    #[error("Command '{command}' exited with status {code}")]
    ExitStatus {
        /// Full command line
        command: String,
        /// Exit code
        code: i32,
    },

    /// The process was terminated without an exit code
    #[error("Command '{command}' was terminated by a signal")]
    Terminated {
        /// Full command line
        command: String,
    },
}

/// Configuration and release context errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Plugin config TOML is invalid
    #[error("Invalid plugin config {path}: {source}")]
    InvalidToml {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },

    /// Release context JSON is invalid
    #[error("Invalid release context: {0}")]
    InvalidContext(#[from] serde_json::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Precondition(PreconditionError::ManifestNotFound { path }) => vec![
                format!("Run the release from the directory containing {}", path.display()),
                "Pass --cwd or --manifest to point at the manifest".to_string(),
            ],
            ReleaseError::Cli(CliError::InvalidArguments { .. }) => vec![
                "Run with --help to see the accepted arguments".to_string(),
            ],
            ReleaseError::Version(VersionError::Empty) => vec![
                "Pass --next-version or a context with nextRelease.version".to_string(),
            ],
            ReleaseError::Version(VersionError::ParseFailed { .. }) => vec![
                "Use a semantic version such as 1.2.3 or 2.0.0-beta.1".to_string(),
            ],
            ReleaseError::Manifest(ManifestError::WriteFailed { .. }) => vec![
                "Check that the manifest is writable by the release user".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_not_found_message() {
        let err: ReleaseError = PreconditionError::ManifestNotFound {
            path: PathBuf::from("Cargo.toml"),
        }
        .into();
        assert_eq!(err.to_string(), "Cargo.toml not found");
    }

    #[test]
    fn test_exit_status_message() {
        let err = BuildError::ExitStatus {
            command: "cargo build --release".to_string(),
            code: 101,
        };
        assert_eq!(
            err.to_string(),
            "Command 'cargo build --release' exited with status 101"
        );
    }
}
