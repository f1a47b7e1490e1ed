//! Version-tag normalization and the recorded-version file.
//!
//! The repository records its released version as an assignment in a
//! TypeScript source file:
//!
//! ```text
//! export const APP_VERSION = '1.2.3';
//! ```
//!
//! After integrating upstream, the sync compares that recorded version with
//! the latest `v*` git tag and rewrites the literal in place when they
//! differ. The rewrite is a narrow text-substitution contract: exactly one
//! declaration must match, and only the quoted literal changes.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use semver::Version;

use crate::error::{Result, SyncError};

/// Pattern a tag must satisfy (after the `v` prefix is stripped) to count
/// as a release version: `MAJOR.MINOR.PATCH` with an optional pre-release
/// suffix.
const VERSION_PATTERN: &str = r"^\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?$";

/// Normalize a git tag into a semantic version.
///
/// Strips a single leading `v`, gates the remainder against
/// [`VERSION_PATTERN`] and parses it. Tags that do not normalize (e.g.
/// `release-1`) are treated as absent: the caller skips reconciliation.
pub fn normalize_version(tag: &str) -> Option<Version> {
    let v = tag.strip_prefix('v').unwrap_or(tag);
    let re = Regex::new(VERSION_PATTERN).ok()?;
    if !re.is_match(v) {
        return None;
    }
    Version::parse(v).ok()
}

/// Pick the latest tag from a list sorted version-descending.
pub fn latest_version_tag(tags: &[String]) -> Option<String> {
    tags.iter()
        .map(|t| t.trim())
        .find(|t| !t.is_empty())
        .map(|t| t.to_string())
}

/// The source file carrying the `APP_VERSION` declaration.
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// Point at a version declaration file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    /// The file being read and rewritten.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the currently recorded version string.
    ///
    /// Fails when the file cannot be read or does not contain the expected
    /// assignment; the sync cannot proceed without knowing the current
    /// version.
    pub fn read_recorded(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)?;
        let re = Regex::new(r#"APP_VERSION\s*=\s*['"]([^'"]+)['"]"#)
            .map_err(|e| SyncError::version_format(e.to_string()))?;
        let captures = re.captures(&content).ok_or_else(|| {
            SyncError::version_format(format!("无法从 {} 读取 APP_VERSION", self.path.display()))
        })?;
        Ok(captures[1].to_string())
    }

    /// Rewrite the recorded version in place.
    ///
    /// Locates the `export const APP_VERSION = '…';` declaration and
    /// replaces only its quoted literal, leaving every other byte of the
    /// file untouched. Zero matches or more than one match is fatal: the
    /// file is left as it was rather than silently corrupted or no-oped.
    pub fn write_recorded(&self, version: &str) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        let re = Regex::new(r#"export\s+const\s+APP_VERSION\s*=\s*['"]([^'"]+)['"]\s*;"#)
            .map_err(|e| SyncError::version_format(e.to_string()))?;

        let mut matches = re.captures_iter(&content);
        let first = matches.next().ok_or_else(|| {
            SyncError::version_format("更新 APP_VERSION 失败：未匹配到版本常量行")
        })?;
        if matches.next().is_some() {
            return Err(SyncError::version_format(
                "更新 APP_VERSION 失败：匹配到多个版本常量行",
            ));
        }

        let literal = first.get(1).ok_or_else(|| {
            SyncError::version_format("更新 APP_VERSION 失败：未匹配到版本常量行")
        })?;
        let mut next = String::with_capacity(content.len());
        next.push_str(&content[..literal.start()]);
        next.push_str(version);
        next.push_str(&content[literal.end()..]);

        fs::write(&self.path, next)?;
        Ok(())
    }
}
