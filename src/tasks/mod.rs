//! Package-manager task abstraction.
//!
//! Mirrors the [`crate::vcs`] split: the workflow depends on the
//! [`TaskRunner`] trait, with [`bun::BunRunner`] driving the real task
//! runner and [`mock::MockTasks`] standing in for tests.

pub mod bun;
pub mod mock;

pub use bun::BunRunner;
pub use mock::MockTasks;

use crate::error::Result;

/// Build/verify commands the sync can run after integration.
///
/// The workflow invokes these in a fixed order (install, typecheck, test,
/// package), each gated by its own flag, and stops at the first failure.
pub trait TaskRunner {
    /// Install dependencies.
    fn install(&self) -> Result<()>;

    /// Type-check the whole tree.
    fn typecheck(&self) -> Result<()>;

    /// Run the test suite.
    fn test(&self) -> Result<()>;

    /// Build the platform distribution package.
    fn package(&self) -> Result<()>;

    /// Fan a freshly written app version out to the other version-bearing
    /// files.
    fn propagate_version(&self) -> Result<()>;
}
