//! Synchronize a fork with its upstream repository.
//!
//! One invocation checks out the target branch, fetches and integrates the
//! upstream remote (merge or rebase), reconciles the recorded app version
//! with the latest release tag, runs the install/typecheck/test/package
//! pipeline, then commits and pushes the result. Strictly sequential,
//! fail-fast: any failing step halts the run.

pub mod config;
pub mod error;
pub mod options;
pub mod shell;
pub mod tasks;
pub mod ui;
pub mod vcs;
pub mod version;
pub mod workflow;

pub use error::{Result, SyncError};
