//! Exercises [`GitCli`] against a real scratch repository.
//!
//! Skipped silently when no `git` binary is available.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

use sync_upstream::shell::Shell;
use sync_upstream::vcs::{GitCli, VcsClient};

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git")
        .status;
    assert!(status.success(), "git {args:?} failed");
}

fn init_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    fs::write(dir.join("README.md"), "hello\n").unwrap();
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-m", "init"]);
}

#[test]
fn test_is_dirty_tracks_working_tree_state() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    let vcs = GitCli::new(Shell::new(dir.path()));

    assert!(!vcs.is_dirty().unwrap());

    fs::write(dir.path().join("untracked.txt"), "x\n").unwrap();
    assert!(vcs.is_dirty().unwrap());
}

#[test]
fn test_version_tags_are_sorted_latest_first() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    git(dir.path(), &["tag", "v0.1.0"]);
    git(dir.path(), &["tag", "v0.10.0"]);
    git(dir.path(), &["tag", "v0.2.0"]);
    git(dir.path(), &["tag", "release-1"]); // not a v* tag

    let vcs = GitCli::new(Shell::new(dir.path()));
    let tags = vcs.version_tags().unwrap();
    assert_eq!(tags, vec!["v0.10.0", "v0.2.0", "v0.1.0"]);
}

#[test]
fn test_remotes_lists_configured_names() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    git(dir.path(), &["remote", "add", "origin", "../nowhere"]);
    git(dir.path(), &["remote", "add", "upstream", "../elsewhere"]);

    let vcs = GitCli::new(Shell::new(dir.path()));
    let remotes = vcs.remotes().unwrap();
    assert!(remotes.contains(&"origin".to_string()));
    assert!(remotes.contains(&"upstream".to_string()));
}

#[test]
fn test_add_all_and_commit_clean_the_tree() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    let vcs = GitCli::new(Shell::new(dir.path()));

    fs::write(dir.path().join("new.txt"), "content\n").unwrap();
    assert!(vcs.is_dirty().unwrap());

    vcs.add_all().unwrap();
    vcs.commit("chore: sync upstream (v1.0.0)").unwrap();
    assert!(!vcs.is_dirty().unwrap());
}

#[test]
fn test_stash_push_and_pop_round_trip() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    let vcs = GitCli::new(Shell::new(dir.path()));

    fs::write(dir.path().join("wip.txt"), "wip\n").unwrap();
    vcs.stash_push("sync-upstream auto stash").unwrap();
    assert!(!vcs.is_dirty().unwrap());

    vcs.stash_pop().unwrap();
    assert!(vcs.is_dirty().unwrap());
    assert!(dir.path().join("wip.txt").exists());
}

#[test]
fn test_failed_git_operation_propagates() {
    if !git_available() {
        return;
    }
    let dir = tempdir().unwrap();
    init_repo(dir.path());
    let vcs = GitCli::new(Shell::new(dir.path()));

    // checking out a branch that does not exist must fail the run
    assert!(vcs.checkout("no-such-branch").is_err());
}
