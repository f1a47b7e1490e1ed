//! Optional TOML defaults file.
//!
//! A `sync-upstream.toml` can pin per-repository defaults (which remote to
//! pull from, which file carries the app version) so the tool runs bare.
//! Command-line flags always override the file. Lookup order:
//!
//! 1. Explicit path from `--config=<path>`
//! 2. `./sync-upstream.toml` in the working directory
//! 3. `sync-upstream.toml` in the user config directory
//!
//! A missing file simply yields built-in defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SyncError};
use crate::options::{Options, Strategy};

/// Defaults loaded from `sync-upstream.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub sync: SyncSection,

    #[serde(default)]
    pub paths: PathsSection,
}

/// `[sync]` section: where to pull from and how to integrate.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SyncSection {
    pub remote: Option<String>,

    pub branch: Option<String>,

    #[serde(rename = "push-remote")]
    pub push_remote: Option<String>,

    pub strategy: Option<String>,
}

/// `[paths]` section: repository files the sync touches.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PathsSection {
    #[serde(rename = "version-file")]
    pub version_file: Option<String>,
}

impl FileConfig {
    /// Layer these defaults over a base Options record.
    ///
    /// An unrecognized strategy literal in the file is ignored, matching
    /// the forgiving behavior of the flag parser.
    pub fn apply(&self, mut opts: Options) -> Options {
        if let Some(remote) = &self.sync.remote {
            opts.remote = remote.clone();
        }
        if let Some(branch) = &self.sync.branch {
            opts.branch = branch.clone();
        }
        if let Some(push_remote) = &self.sync.push_remote {
            opts.push_remote = push_remote.clone();
        }
        if let Some(strategy) = self.sync.strategy.as_deref().and_then(Strategy::parse) {
            opts.strategy = strategy;
        }
        if let Some(version_file) = &self.paths.version_file {
            opts.version_file = version_file.clone();
        }
        opts
    }
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional explicit path to a configuration file
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or default configuration
/// * `Err` - If a file was found but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./sync-upstream.toml").exists() {
        fs::read_to_string("./sync-upstream.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("sync-upstream.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str).map_err(|e| SyncError::config(format!("invalid config: {e}")))
}
