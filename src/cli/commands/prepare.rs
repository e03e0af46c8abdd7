//! prepare command implementation.

use crate::cli::RuntimeConfig;
use crate::context::{HostContext, NextRelease, ReleaseContext};
use crate::error::{CliError, Result};
use crate::plugin::ReleasePreparer;
use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a release context document from a file, or stdin for `-`
fn read_host_context(path: &Path) -> Result<HostContext> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read release context from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read release context {}", path.display()))?
    };

    HostContext::from_json(&json)
}

/// Execute prepare
pub(super) fn execute_prepare(
    config: &RuntimeConfig,
    next_version: Option<&str>,
    context_file: Option<&Path>,
) -> Result<()> {
    let (next_release, host_cwd): (NextRelease, Option<PathBuf>) =
        match (next_version, context_file) {
            (Some(version), _) => (NextRelease::new(version), None),
            (None, Some(path)) => {
                let host = read_host_context(path)?;
                (host.next_release, host.cwd)
            }
            (None, None) => {
                return Err(CliError::InvalidArguments {
                    reason: "prepare requires --next-version or --context".to_string(),
                }
                .into());
            }
        };

    let context = ReleaseContext::new(next_release, &config.output, config.release_dir(host_cwd)?);
    let outcome = ReleasePreparer::new().prepare(&config.plugin, &context)?;

    if let Some(previous) = &outcome.previous_version {
        log::info!("Manifest version {} -> {}", previous, outcome.version);
    }
    if outcome.build_succeeded() {
        config.success_println(&format!("Prepared release {}", outcome.version));
    }

    Ok(())
}
