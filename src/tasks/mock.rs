//! Mock task runner for testing without a package manager.

use std::sync::Mutex;

use crate::error::{Result, SyncError};
use crate::tasks::TaskRunner;

/// Recording [`TaskRunner`] with scriptable failures.
pub struct MockTasks {
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockTasks {
    /// Create a mock where every task succeeds.
    pub fn new() -> Self {
        MockTasks {
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the named task fail (e.g. `"test"`).
    pub fn fail_on(&mut self, task: &str) {
        self.fail_on = Some(task.to_string());
    }

    /// Every task invoked, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether the named task was invoked.
    pub fn called(&self, task: &str) -> bool {
        self.calls().iter().any(|c| c == task)
    }

    fn record(&self, name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.fail_on.as_deref() == Some(name) {
            return Err(SyncError::command(format!("mock {name}"), Some(1)));
        }
        Ok(())
    }
}

impl Default for MockTasks {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRunner for MockTasks {
    fn install(&self) -> Result<()> {
        self.record("install")
    }

    fn typecheck(&self) -> Result<()> {
        self.record("typecheck")
    }

    fn test(&self) -> Result<()> {
        self.record("test")
    }

    fn package(&self) -> Result<()> {
        self.record("package")
    }

    fn propagate_version(&self) -> Result<()> {
        self.record("propagate_version")
    }
}
