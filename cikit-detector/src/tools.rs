//! External tool invocation.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::DetectError;

/// Captured result of a finished tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stderr: String,
}

impl ToolOutput {
    /// Last non-blank stderr line, the usual place for the real error.
    pub fn error_line(&self) -> &str {
        self.stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

/// Runs tools with the working tree as their current directory.
#[derive(Debug, Clone)]
pub struct ToolRunner {
    cwd: PathBuf,
}

impl ToolRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn capture(&self, program: &str, args: &[&str]) -> Result<ToolOutput, DetectError> {
        tracing::debug!("running {program} {}", args.join(" "));
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| spawn_err(program, source))?;

        Ok(ToolOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run with stdout and stderr passed straight through.
    pub fn inherit(&self, program: &str, args: &[&str]) -> Result<ExitStatus, DetectError> {
        tracing::debug!("running {program} {}", args.join(" "));
        Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|source| spawn_err(program, source))
    }
}

fn spawn_err(program: &str, source: std::io::Error) -> DetectError {
    DetectError::Spawn {
        program: program.to_string(),
        source,
    }
}
