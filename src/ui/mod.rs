//! User-facing output.
//!
//! The sync is non-interactive; all this module does is format progress and
//! outcome lines consistently.

pub mod formatter;

pub use formatter::{display_error, display_status, display_success};
