//! External release build invocation.

use crate::error::BuildError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A build program plus arguments, run in the release directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    /// Split `[program, args...]` into a command
    pub fn from_parts(parts: &[String]) -> Result<Self, BuildError> {
        let (program, args) = parts.split_first().ok_or(BuildError::EmptyCommand)?;
        if program.trim().is_empty() {
            return Err(BuildError::EmptyCommand);
        }

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Command line for display
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn resolve_program(&self, cwd: &Path) -> Result<PathBuf, BuildError> {
        which::which_in(&self.program, std::env::var_os("PATH"), cwd).map_err(|source| {
            BuildError::ProgramNotFound {
                program: self.program.clone(),
                source,
            }
        })
    }

    /// Run to completion with inherited stdio. Blocks until the process exits.
    pub fn run(&self, cwd: &Path) -> Result<(), BuildError> {
        let program = self.resolve_program(cwd)?;
        log::debug!("Running {} (resolved to {})", self.display(), program.display());

        let status = Command::new(&program)
            .args(&self.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BuildError::SpawnFailed {
                command: self.display(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(BuildError::ExitStatus {
                command: self.display(),
                code,
            }),
            None => Err(BuildError::Terminated {
                command: self.display(),
            }),
        }
    }
}
