//! The `verifyConditions` and `prepare` lifecycle hooks.

use crate::build::BuildCommand;
use crate::config::PluginConfig;
use crate::context::ReleaseContext;
use crate::error::{BuildError, PreconditionError, Result};
use crate::version::update_manifest_version;

/// What `prepare` did. The host only cares that it returned `Ok`.
#[derive(Debug)]
pub struct PrepareOutcome {
    /// Version written to the manifest
    pub version: String,
    /// Value replaced in the manifest, `None` if it had no version line
    pub previous_version: Option<String>,
    /// Build failure that was logged and absorbed
    pub build_error: Option<BuildError>,
}

impl PrepareOutcome {
    /// Whether the release build succeeded
    pub fn build_succeeded(&self) -> bool {
        self.build_error.is_none()
    }
}

/// Lifecycle hooks for releasing a Cargo project
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleasePreparer;

impl ReleasePreparer {
    /// Create the plugin
    pub fn new() -> Self {
        Self
    }

    /// Fail with a precondition error unless the manifest exists.
    ///
    /// The manifest must be a regular file; a directory at the manifest path
    /// fails the check. Its contents are not inspected.
    pub fn verify_conditions(&self, config: &PluginConfig, context: &ReleaseContext<'_>) -> Result<()> {
        let manifest = config.manifest_path();
        let resolved = context.resolve(manifest);
        log::debug!("Checking for manifest at {}", resolved.display());

        if !resolved.is_file() {
            return Err(PreconditionError::ManifestNotFound {
                path: manifest.to_path_buf(),
            }
            .into());
        }

        Ok(())
    }

    /// Write the next version into the manifest, then build the release binary.
    ///
    /// A failed build is reported through the context logger and does not
    /// fail the hook.
    pub fn prepare(&self, config: &PluginConfig, context: &ReleaseContext<'_>) -> Result<PrepareOutcome> {
        let version = context.next_release.parsed_version()?.to_string();
        let logger = context.logger;
        let manifest = config.manifest_path();

        logger.log(&format!(
            "Updating {} to version {}",
            manifest.display(),
            version
        ));

        let patch = update_manifest_version(&context.resolve(manifest), &version)?;

        logger.log("Building release binary");
        let build_error = match BuildCommand::from_parts(&config.build_command())
            .and_then(|command| command.run(&context.cwd))
        {
            Ok(()) => {
                logger.log("Successfully built release binary");
                None
            }
            Err(e) => {
                logger.error("Failed to build release binary");
                logger.error(&e.to_string());
                Some(e)
            }
        };

        Ok(PrepareOutcome {
            version,
            previous_version: patch.previous,
            build_error,
        })
    }
}
