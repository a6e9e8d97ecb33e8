//! Process-spawning validator entry point.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::error::BoxError;
use crate::ports::ValidatorEntryPoint;

/// Failure modes of the external validator process.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn validator '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("validator '{program}' failed ({status}): {stderr}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Runs the validator as an external executable.
///
/// Arguments are passed as an argv array; no shell is involved. The report
/// is whatever the validator writes to the path given via `-o`; we only
/// relay success or failure, with captured stderr on failure.
#[derive(Debug, Clone)]
pub struct ProcessEntryPoint {
    program: PathBuf,
}

impl ProcessEntryPoint {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ValidatorEntryPoint for ProcessEntryPoint {
    fn run(&self, args: &[String]) -> Result<(), BoxError> {
        let program = self.program.display().to_string();
        debug!(%program, ?args, "invoking validator");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| ProcessError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProcessError::Exit {
                program,
                status: output.status,
                stderr,
            }
            .into());
        }

        debug!(%program, "validator completed");
        Ok(())
    }
}
