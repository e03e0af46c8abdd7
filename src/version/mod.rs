//! Manifest version updates.
//!
//! This module rewrites the declared version of a Cargo manifest in place,
//! leaving the rest of the file byte-for-byte intact.

mod line;

pub use line::{VersionLinePatch, set_version_line};

use crate::error::{ManifestError, Result};
use std::path::Path;

/// Update the version line of the manifest at `manifest_path`.
///
/// The file is always written back, even when it has no version line; in that
/// case the content is unchanged.
pub fn update_manifest_version(manifest_path: &Path, new_version: &str) -> Result<VersionLinePatch> {
    let content =
        std::fs::read_to_string(manifest_path).map_err(|source| ManifestError::ReadFailed {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let patch = set_version_line(&content, new_version);

    match &patch.previous {
        Some(previous) => log::debug!(
            "{}: version {} -> {}",
            manifest_path.display(),
            previous,
            new_version
        ),
        None => log::warn!(
            "No version line found in {}, leaving it unchanged",
            manifest_path.display()
        ),
    }

    std::fs::write(manifest_path, &patch.content).map_err(|source| {
        ManifestError::WriteFailed {
            path: manifest_path.to_path_buf(),
            source,
        }
    })?;

    Ok(patch)
}
