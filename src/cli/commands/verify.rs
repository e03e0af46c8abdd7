//! verifyConditions command implementation.

use crate::cli::RuntimeConfig;
use crate::context::{NextRelease, ReleaseContext};
use crate::error::Result;
use crate::plugin::ReleasePreparer;

/// Execute verify-conditions
pub(super) fn execute_verify_conditions(config: &RuntimeConfig) -> Result<()> {
    // No release is known yet at this stage of the pipeline
    let context = ReleaseContext::new(
        NextRelease::new(String::new()),
        &config.output,
        config.release_dir(None)?,
    );

    ReleasePreparer::new().verify_conditions(&config.plugin, &context)?;
    log::info!(
        "{} present in {}",
        config.plugin.manifest_path().display(),
        context.cwd.display()
    );
    Ok(())
}
