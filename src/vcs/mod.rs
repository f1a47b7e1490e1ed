//! Version-control abstraction layer.
//!
//! The sync workflow never talks to git directly; it goes through the
//! [`VcsClient`] trait so the orchestration logic can be exercised against
//! a scripted fake. Implementations:
//!
//! - [`git_cli::GitCli`]: drives the `git` binary through [`crate::shell::Shell`]
//! - [`mock::MockVcs`]: in-memory implementation for testing

pub mod git_cli;
pub mod mock;

pub use git_cli::GitCli;
pub use mock::MockVcs;

use crate::error::Result;

/// Capability surface of the version-control system consumed by the
/// workflow.
///
/// Every method maps to one git operation the sync performs. Mutating
/// methods (`stash_push`, `checkout`, `fetch`, `merge`, `rebase`,
/// `add_all`, `commit`, `push`, `stash_pop`) must not run during a dry run;
/// the workflow enforces this, and [`mock::MockVcs`] records calls so tests
/// can verify it.
pub trait VcsClient {
    /// Names of all configured remotes.
    fn remotes(&self) -> Result<Vec<String>>;

    /// Whether the working tree has any tracked or untracked change.
    fn is_dirty(&self) -> Result<bool>;

    /// Shelve all working-tree changes (including untracked files) under a
    /// label.
    fn stash_push(&self, label: &str) -> Result<()>;

    /// Restore the most recent stash.
    fn stash_pop(&self) -> Result<()>;

    /// Check out a local branch.
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Fetch a remote, including its tags.
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Merge the given ref into the current branch without opening an
    /// editor.
    fn merge(&self, upstream_ref: &str) -> Result<()>;

    /// Replay local commits onto the given ref.
    fn rebase(&self, upstream_ref: &str) -> Result<()>;

    /// All `v`-prefixed tags, sorted by version descending (latest first).
    fn version_tags(&self) -> Result<Vec<String>>;

    /// Stage every change in the working tree.
    fn add_all(&self) -> Result<()>;

    /// Commit staged changes with the given message.
    fn commit(&self, message: &str) -> Result<()>;

    /// Push the given branch to a remote.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}
