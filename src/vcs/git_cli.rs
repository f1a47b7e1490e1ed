//! [`VcsClient`] backed by the `git` command-line interface.

use crate::error::Result;
use crate::shell::Shell;
use crate::vcs::VcsClient;

/// Real git operations, executed through a [`Shell`].
///
/// Probes (`remotes`, `is_dirty`, `version_tags`) run quietly; mutating
/// operations stream git's stderr so the operator sees fetch/merge progress
/// and conflict reports as they happen.
pub struct GitCli {
    shell: Shell,
}

impl GitCli {
    /// Create a client running git in the shell's working directory.
    pub fn new(shell: Shell) -> Self {
        GitCli { shell }
    }
}

impl VcsClient for GitCli {
    fn remotes(&self) -> Result<Vec<String>> {
        let out = self.shell.run_quiet("git", &["remote"])?;
        Ok(out
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }

    fn is_dirty(&self) -> Result<bool> {
        let status = self.shell.run_quiet("git", &["status", "--porcelain=v1"])?;
        Ok(!status.is_empty())
    }

    fn stash_push(&self, label: &str) -> Result<()> {
        self.shell
            .run("git", &["stash", "push", "-u", "-m", label])?;
        Ok(())
    }

    fn stash_pop(&self) -> Result<()> {
        self.shell.run("git", &["stash", "pop"])?;
        Ok(())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.shell.run("git", &["checkout", branch])?;
        Ok(())
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.shell.run("git", &["fetch", remote, "--tags"])?;
        Ok(())
    }

    fn merge(&self, upstream_ref: &str) -> Result<()> {
        self.shell.run("git", &["merge", "--no-edit", upstream_ref])?;
        Ok(())
    }

    fn rebase(&self, upstream_ref: &str) -> Result<()> {
        self.shell.run("git", &["rebase", upstream_ref])?;
        Ok(())
    }

    fn version_tags(&self) -> Result<Vec<String>> {
        let out = self
            .shell
            .run_quiet("git", &["tag", "--list", "v*", "--sort=-v:refname"])?;
        Ok(out
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }

    fn add_all(&self) -> Result<()> {
        self.shell.run("git", &["add", "-A"])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.shell.run("git", &["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.shell.run("git", &["push", remote, branch])?;
        Ok(())
    }
}
