//! Mock version-control client for testing without a real repository.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Result, SyncError};
use crate::vcs::VcsClient;

/// Scripted [`VcsClient`] that records every call.
///
/// State probes are configured up front: the remote list, the tag list
/// (latest first, as git would sort them) and a queue of answers for
/// successive `is_dirty` calls (defaults to clean once exhausted). Any
/// single operation can be scripted to fail, simulating a merge conflict or
/// a rejected push.
pub struct MockVcs {
    remotes: Vec<String>,
    tags: Vec<String>,
    dirty: Mutex<VecDeque<bool>>,
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockVcs {
    /// Create a mock with `origin` and `upstream` configured and a clean
    /// tree.
    pub fn new() -> Self {
        MockVcs {
            remotes: vec!["origin".to_string(), "upstream".to_string()],
            tags: Vec::new(),
            dirty: Mutex::new(VecDeque::new()),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replace the configured remotes.
    pub fn set_remotes(&mut self, remotes: &[&str]) {
        self.remotes = remotes.iter().map(|r| r.to_string()).collect();
    }

    /// Set the version tags, latest first.
    pub fn set_tags(&mut self, tags: &[&str]) {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
    }

    /// Queue an answer for the next `is_dirty` call.
    pub fn push_dirty(&mut self, dirty: bool) {
        self.dirty.lock().unwrap().push_back(dirty);
    }

    /// Make the named operation fail (e.g. `"merge"`, `"push"`).
    pub fn fail_on(&mut self, operation: &str) {
        self.fail_on = Some(operation.to_string());
    }

    /// Everything invoked on this mock, in order, as `"name arg …"` lines.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether an operation with the given name was invoked.
    pub fn called(&self, operation: &str) -> bool {
        self.calls()
            .iter()
            .any(|c| c.split_whitespace().next() == Some(operation))
    }

    fn record(&self, call: String) -> Result<()> {
        let name = call
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        self.calls.lock().unwrap().push(call);
        if self.fail_on.as_deref() == Some(name.as_str()) {
            return Err(SyncError::command(format!("mock {name}"), Some(1)));
        }
        Ok(())
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for MockVcs {
    fn remotes(&self) -> Result<Vec<String>> {
        self.record("remotes".to_string())?;
        Ok(self.remotes.clone())
    }

    fn is_dirty(&self) -> Result<bool> {
        self.record("is_dirty".to_string())?;
        Ok(self.dirty.lock().unwrap().pop_front().unwrap_or(false))
    }

    fn stash_push(&self, label: &str) -> Result<()> {
        self.record(format!("stash_push {label}"))
    }

    fn stash_pop(&self) -> Result<()> {
        self.record("stash_pop".to_string())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout {branch}"))
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.record(format!("fetch {remote}"))
    }

    fn merge(&self, upstream_ref: &str) -> Result<()> {
        self.record(format!("merge {upstream_ref}"))
    }

    fn rebase(&self, upstream_ref: &str) -> Result<()> {
        self.record(format!("rebase {upstream_ref}"))
    }

    fn version_tags(&self) -> Result<Vec<String>> {
        self.record("version_tags".to_string())?;
        Ok(self.tags.clone())
    }

    fn add_all(&self) -> Result<()> {
        self.record("add_all".to_string())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit {message}"))
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {remote} {branch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls_in_order() {
        let vcs = MockVcs::new();
        vcs.checkout("main").unwrap();
        vcs.fetch("upstream").unwrap();
        assert_eq!(vcs.calls(), vec!["checkout main", "fetch upstream"]);
    }

    #[test]
    fn test_dirty_queue_defaults_to_clean() {
        let mut vcs = MockVcs::new();
        vcs.push_dirty(true);
        assert!(vcs.is_dirty().unwrap());
        assert!(!vcs.is_dirty().unwrap());
    }

    #[test]
    fn test_fail_on_named_operation() {
        let mut vcs = MockVcs::new();
        vcs.fail_on("merge");
        vcs.checkout("main").unwrap();
        assert!(vcs.merge("upstream/main").is_err());
        // the failed call is still recorded
        assert!(vcs.called("merge"));
    }

    #[test]
    fn test_tags_latest_first() {
        let mut vcs = MockVcs::new();
        vcs.set_tags(&["v1.1.0", "v1.0.0"]);
        assert_eq!(vcs.version_tags().unwrap()[0], "v1.1.0");
    }
}
