//! Host-supplied release context.

use crate::error::{ConfigError, Result, VersionError};
use semver::Version;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Logging capability handed to the hooks by the host
pub trait Logger {
    /// Informational message
    fn log(&self, message: &str);

    /// Error message
    fn error(&self, message: &str);
}

/// The release being prepared
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NextRelease {
    /// Version string, e.g. `1.4.0`
    pub version: String,
}

impl NextRelease {
    /// Create from a version string
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Parse the version, rejecting empty and non-semver strings
    pub fn parsed_version(&self) -> Result<Version> {
        let version = self.version.trim();
        if version.is_empty() {
            return Err(VersionError::Empty.into());
        }

        Version::parse(version).map_err(|source| {
            VersionError::ParseFailed {
                version: version.to_string(),
                source,
            }
            .into()
        })
    }
}

/// Everything the hooks read from the host for one invocation
pub struct ReleaseContext<'a> {
    /// Release being prepared
    pub next_release: NextRelease,
    /// Host logger
    pub logger: &'a dyn Logger,
    /// Directory the manifest and build command are resolved against
    pub cwd: PathBuf,
}

impl<'a> ReleaseContext<'a> {
    /// Create a context rooted at `cwd`
    pub fn new(next_release: NextRelease, logger: &'a dyn Logger, cwd: impl Into<PathBuf>) -> Self {
        Self {
            next_release,
            logger,
            cwd: cwd.into(),
        }
    }

    /// Resolve a path relative to the release directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }
}

/// Serialized release context, as written by the host pipeline.
///
/// Only the fields the hooks read are modeled; everything else in the
/// document (commits, branches, env...) is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    /// Release being prepared
    pub next_release: NextRelease,
    /// Working directory of the host
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

impl HostContext {
    /// Parse a context JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidContext(e).into())
    }
}
