//! Synchronous external command execution.
//!
//! Every external action of a sync run goes through [`Shell`]: git probes
//! and mutations, package-manager steps, the version propagation script.
//! A non-zero exit from any child is mapped to [`SyncError::Command`] and
//! halts the run; git state and build state must never advance past a
//! failed step.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, SyncError};

/// Runs external commands from a fixed working directory.
///
/// Two verbosity modes:
/// - [`Shell::run`] streams the child's stderr to the terminal (fetch,
///   merge, install — actions the operator watches),
/// - [`Shell::run_quiet`] captures both streams (state probes like
///   `git status --porcelain`).
///
/// Both block until the child exits and return trimmed stdout.
#[derive(Debug, Clone)]
pub struct Shell {
    cwd: PathBuf,
}

impl Shell {
    /// Create a shell anchored to the given working directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Shell { cwd: cwd.into() }
    }

    /// The directory child processes run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run a command, streaming its stderr to the parent's stderr.
    pub fn run(&self, cmd: &str, args: &[&str]) -> Result<String> {
        self.execute(cmd, args, false)
    }

    /// Run a command with all child output captured.
    pub fn run_quiet(&self, cmd: &str, args: &[&str]) -> Result<String> {
        self.execute(cmd, args, true)
    }

    fn execute(&self, cmd: &str, args: &[&str], quiet: bool) -> Result<String> {
        let mut command = Command::new(cmd);
        command
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped());
        if quiet {
            command.stderr(Stdio::piped());
        } else {
            command.stderr(Stdio::inherit());
        }

        let display = display_command(cmd, args);
        let output = command
            .output()
            .map_err(|e| SyncError::command(format!("{display}: {e}"), None))?;

        if !output.status.success() {
            return Err(SyncError::command(display, output.status.code()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn display_command(cmd: &str, args: &[&str]) -> String {
    if args.is_empty() {
        cmd.to_string()
    } else {
        format!("{} {}", cmd, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(std::env::temp_dir())
    }

    #[test]
    fn test_run_quiet_returns_trimmed_stdout() {
        let out = shell().run_quiet("echo", &["hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_run_returns_trimmed_stdout() {
        let out = shell().run("echo", &["  spaced  "]).unwrap();
        assert_eq!(out, "spaced");
    }

    #[test]
    fn test_nonzero_exit_is_command_error() {
        let err = shell().run_quiet("sh", &["-c", "exit 3"]).unwrap_err();
        match err {
            SyncError::Command { command, status } => {
                assert!(command.starts_with("sh"));
                assert_eq!(status, Some(3));
            }
            other => panic!("expected Command error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_binary_is_command_error() {
        let err = shell()
            .run_quiet("definitely-not-a-real-binary", &[])
            .unwrap_err();
        assert!(matches!(err, SyncError::Command { status: None, .. }));
    }

    #[test]
    fn test_display_command_joins_args() {
        assert_eq!(display_command("git", &["fetch", "upstream"]), "git fetch upstream");
        assert_eq!(display_command("bun", &[]), "bun");
    }
}
