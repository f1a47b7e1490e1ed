//! The single-pass sync pipeline.
//!
//! One invocation walks a fixed sequence of steps:
//!
//! ```text
//! remote validation -> [dry-run exit] -> stash guard -> checkout -> fetch
//!   -> integrate -> version reconcile -> install/typecheck/test/package
//!   -> commit -> push -> stash restore
//! ```
//!
//! Every step either succeeds (continue) or returns a tagged
//! [`SyncError`](crate::error::SyncError), halting the run. There is no
//! retry and no rollback of completed steps: git and build state must stay
//! inspectable by the operator after a failure.

use crate::error::{Result, SyncError};
use crate::options::{Options, Strategy};
use crate::tasks::TaskRunner;
use crate::ui;
use crate::vcs::VcsClient;
use crate::version::{latest_version_tag, normalize_version, VersionFile};

/// Label attached to the stash created by the working-tree guard.
pub const STASH_LABEL: &str = "sync-upstream auto stash";

/// What a completed run did, for the driver's summary and for tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    /// Run stopped after printing the resolved configuration.
    pub dry_run: bool,
    /// Latest `v*` tag found after fetching, normalized or not.
    pub latest_tag: Option<String>,
    /// Version written into the version file, when it was stale.
    pub version_written: Option<String>,
    /// Whether a sync commit was created.
    pub committed: bool,
    /// Whether the branch was pushed.
    pub pushed: bool,
    /// Whether the working-tree guard created a stash.
    pub stash_created: bool,
}

/// Orchestrates one sync run over abstract VCS and task capabilities.
pub struct SyncWorkflow<'a, V: VcsClient, T: TaskRunner> {
    vcs: &'a V,
    tasks: &'a T,
    options: &'a Options,
}

impl<'a, V: VcsClient, T: TaskRunner> SyncWorkflow<'a, V, T> {
    /// Bind a workflow to its collaborators and resolved options.
    pub fn new(vcs: &'a V, tasks: &'a T, options: &'a Options) -> Self {
        SyncWorkflow {
            vcs,
            tasks,
            options,
        }
    }

    /// Execute the pipeline once.
    pub fn run(&self) -> Result<SyncOutcome> {
        let opts = self.options;

        self.ensure_remote_exists(&opts.remote)?;
        self.ensure_remote_exists(&opts.push_remote)?;

        if opts.dry_run {
            println!("{}", opts.to_pretty_json());
            return Ok(SyncOutcome {
                dry_run: true,
                ..SyncOutcome::default()
            });
        }

        let stash_created = self.stash_if_needed()?;

        ui::display_status(&format!("Checking out '{}'", opts.branch));
        self.vcs.checkout(&opts.branch)?;

        ui::display_status(&format!("Fetching '{}' with tags", opts.remote));
        self.vcs.fetch(&opts.remote)?;

        let upstream_ref = format!("{}/{}", opts.remote, opts.branch);
        match opts.strategy {
            Strategy::Rebase => {
                ui::display_status(&format!("Rebasing onto {}", upstream_ref));
                self.vcs.rebase(&upstream_ref)?;
            }
            Strategy::Merge => {
                ui::display_status(&format!("Merging {}", upstream_ref));
                self.vcs.merge(&upstream_ref)?;
            }
        }

        let latest_tag = latest_version_tag(&self.vcs.version_tags()?);
        let version_written = match &latest_tag {
            Some(tag) => self.reconcile_version(tag)?,
            None => None,
        };

        if opts.install {
            self.tasks.install()?;
        }
        if opts.typecheck {
            self.tasks.typecheck()?;
        }
        if opts.test {
            self.tasks.test()?;
        }
        if opts.dmg_mac {
            self.tasks.package()?;
        }

        let mut committed = false;
        if opts.commit {
            let message = match &latest_tag {
                Some(tag) => format!("chore: sync {} ({})", opts.remote, tag),
                None => format!("chore: sync {}", opts.remote),
            };
            committed = self.maybe_commit(&message)?;
        }

        let mut pushed = false;
        if opts.push {
            ui::display_status(&format!(
                "Pushing '{}' to '{}'",
                opts.branch, opts.push_remote
            ));
            self.vcs.push(&opts.push_remote, &opts.branch)?;
            pushed = true;
        }

        // Reached only when every prior step succeeded. A mid-run failure
        // leaves the stash in place for the operator to restore by hand.
        if stash_created {
            self.vcs.stash_pop()?;
            ui::display_status("Restored stashed changes");
        }

        Ok(SyncOutcome {
            dry_run: false,
            latest_tag,
            version_written,
            committed,
            pushed,
            stash_created,
        })
    }

    fn ensure_remote_exists(&self, name: &str) -> Result<()> {
        let remotes = self.vcs.remotes()?;
        if !remotes.iter().any(|r| r == name) {
            return Err(SyncError::config(format!("未找到 git remote: {name}")));
        }
        Ok(())
    }

    /// Working-tree guard: shelve local changes before touching the branch.
    fn stash_if_needed(&self) -> Result<bool> {
        if !self.vcs.is_dirty()? {
            return Ok(false);
        }
        if !self.options.auto_stash {
            return Err(SyncError::precondition(
                "工作区有未提交改动，请先提交或清理后再执行，或使用默认自动暂存。",
            ));
        }
        self.vcs.stash_push(STASH_LABEL)?;
        Ok(true)
    }

    /// Bring the recorded version in line with the latest tag.
    ///
    /// A tag that does not normalize is treated as "no release": the step
    /// is skipped silently. A version file without the expected declaration
    /// is fatal. Returns the version written, or `None` for a no-op.
    fn reconcile_version(&self, latest_tag: &str) -> Result<Option<String>> {
        let Some(latest) = normalize_version(latest_tag) else {
            return Ok(None);
        };
        let latest = latest.to_string();

        let file = VersionFile::new(&self.options.version_file);
        let current = file.read_recorded()?;
        if current == latest {
            return Ok(None);
        }

        ui::display_status(&format!("Recorded version {current} -> {latest}"));
        file.write_recorded(&latest)?;
        self.tasks.propagate_version()?;
        Ok(Some(latest))
    }

    /// Commit everything if the tree is dirty; no-op on a clean tree.
    fn maybe_commit(&self, message: &str) -> Result<bool> {
        if !self.vcs.is_dirty()? {
            return Ok(false);
        }
        self.vcs.add_all()?;
        self.vcs.commit(message)?;
        Ok(true)
    }
}
