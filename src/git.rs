//! Git command runner.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git invocations go through this module.

use crate::error::{FilterError, Result};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(FilterError::GitError)` - If git could not be spawned or exited non-zero
///
/// No timeout is applied; a hanging git blocks the caller.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let command = format!("git {}", args.join(" "));
    debug!("running `{}` in {}", command, cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            FilterError::GitError(format!(
                "could not run `{}` in {} (is git on PATH?): {}",
                command,
                cwd.display(),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        return Ok(git_output);
    }

    let reason = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };
    Err(FilterError::GitError(format!(
        "`{}` in {} exited with {}: {}",
        command,
        cwd.display(),
        output
            .status
            .code()
            .map_or_else(|| "a signal".to_string(), |c| format!("code {}", c)),
        reason
    )))
}
