//! semantic_release_cargo - semantic-release hooks for Cargo projects.
//!
//! Runs `verifyConditions` or `prepare` as a subcommand and reports the
//! outcome through the exit code.

use semantic_release_cargo::cli;
use semantic_release_cargo::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
