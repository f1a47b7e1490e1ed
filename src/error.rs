use thiserror::Error;

/// Unified error type for sync-upstream operations
///
/// Each variant is one failure class of a run: the top-level driver only
/// needs the message, while tests match on the variant to assert where a
/// run halted.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Command failed: {command}{}", status_suffix(.status))]
    Command {
        command: String,
        status: Option<i32>,
    },

    #[error("Version format error: {0}")]
    VersionFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (exit status {code})"),
        None => String::new(),
    }
}

/// Convenience type alias for Results in sync-upstream
pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SyncError::Config(msg.into())
    }

    /// Create a precondition error with context
    pub fn precondition(msg: impl Into<String>) -> Self {
        SyncError::Precondition(msg.into())
    }

    /// Create a command failure for a named external command
    pub fn command(command: impl Into<String>, status: Option<i32>) -> Self {
        SyncError::Command {
            command: command.into(),
            status,
        }
    }

    /// Create a version format error with context
    pub fn version_format(msg: impl Into<String>) -> Self {
        SyncError::VersionFormat(msg.into())
    }
}
