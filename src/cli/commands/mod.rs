//! Hook command execution.
//!
//! Maps hook results onto process exit codes: inconsistent arguments exit 2,
//! a fatal hook error exits 1, everything else (including an absorbed build
//! failure) exits 0.

mod prepare;
mod verify;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::{ReleaseError, Result};

use prepare::execute_prepare;
use verify::execute_verify_conditions;

/// Execute the hook named by the parsed arguments
pub fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from_args(&args)?;

    let result = match &args.command {
        Command::VerifyConditions => execute_verify_conditions(&config),
        Command::Prepare {
            next_version,
            context,
        } => execute_prepare(&config, next_version.as_deref(), context.as_deref()),
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&e.to_string());
            log::debug!("Hook '{}' failed: {:?}", args.command.name(), e);

            if !config.output.is_quiet() {
                let suggestions = e.recovery_suggestions();
                if !suggestions.is_empty() {
                    config.println("\n💡 Recovery suggestions:");
                    for suggestion in suggestions {
                        config.println(&format!("  • {}", suggestion));
                    }
                }
            }

            match e {
                ReleaseError::Cli(_) => Ok(2),
                _ => Ok(1),
            }
        }
    }
}
