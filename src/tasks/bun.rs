//! [`TaskRunner`] backed by the `bun` package manager.

use crate::error::Result;
use crate::shell::Shell;
use crate::tasks::TaskRunner;

/// Runs the repository's bun scripts with output streamed to the operator.
pub struct BunRunner {
    shell: Shell,
}

impl BunRunner {
    /// Create a runner executing bun in the shell's working directory.
    pub fn new(shell: Shell) -> Self {
        BunRunner { shell }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        self.shell.run("bun", args)?;
        Ok(())
    }
}

impl TaskRunner for BunRunner {
    fn install(&self) -> Result<()> {
        self.run(&["install"])
    }

    fn typecheck(&self) -> Result<()> {
        self.run(&["run", "typecheck:all"])
    }

    fn test(&self) -> Result<()> {
        self.run(&["test"])
    }

    fn package(&self) -> Result<()> {
        self.run(&["run", "electron:dist:mac"])
    }

    fn propagate_version(&self) -> Result<()> {
        self.run(&["run", "scripts/sync-version.ts"])
    }
}
