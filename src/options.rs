//! Run configuration resolved from command-line flags.
//!
//! The parser is deliberately forgiving: tokens without a `--` prefix and
//! unrecognized keys are skipped instead of rejected, so a typo never aborts
//! a sync. Recognized flags are `--key=value` pairs or bare toggles, with
//! booleans defaulting to on and negated through their `no-*` form.

use serde::Serialize;

/// How upstream changes are integrated into the local branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Merge,
    Rebase,
}

impl Strategy {
    /// Parse a strategy literal; anything but `merge`/`rebase` is `None`.
    pub fn parse(value: &str) -> Option<Strategy> {
        match value {
            "merge" => Some(Strategy::Merge),
            "rebase" => Some(Strategy::Rebase),
            _ => None,
        }
    }
}

/// Immutable configuration for one sync run.
///
/// Built once by [`Options::parse_from`] and never mutated afterwards.
/// Serializes to JSON for the `--dry-run` dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub remote: String,
    pub branch: String,
    pub strategy: Strategy,
    pub install: bool,
    pub typecheck: bool,
    pub test: bool,
    pub dmg_mac: bool,
    pub commit: bool,
    pub push: bool,
    pub push_remote: String,
    pub auto_stash: bool,
    pub dry_run: bool,
    pub version_file: String,
}

/// Default path of the version declaration file, relative to the repo root.
pub const DEFAULT_VERSION_FILE: &str = "packages/shared/src/version/app-version.ts";

impl Default for Options {
    fn default() -> Self {
        Options {
            remote: "upstream".to_string(),
            branch: "main".to_string(),
            strategy: Strategy::Merge,
            install: true,
            typecheck: true,
            test: true,
            dmg_mac: false,
            commit: true,
            push: true,
            push_remote: "origin".to_string(),
            auto_stash: true,
            dry_run: false,
            version_file: DEFAULT_VERSION_FILE.to_string(),
        }
    }
}

impl Options {
    /// Parse command-line tokens on top of a base configuration.
    ///
    /// The base is usually [`Options::default`], or defaults already merged
    /// with a config file (see [`crate::config`]). Flags always win over the
    /// base. String-valued flags require a non-empty value; `--strategy`
    /// accepts only `merge` or `rebase` and otherwise keeps the prior value.
    pub fn parse_from<I, S>(args: I, base: Options) -> Options
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = base;

        for arg in args {
            let arg = arg.as_ref();
            let Some(rest) = arg.strip_prefix("--") else {
                continue;
            };
            let (raw_key, raw_value) = match rest.split_once('=') {
                Some((k, v)) => (k, v),
                None => (rest, ""),
            };
            let key = raw_key.trim();
            let value = raw_value.trim();

            match key {
                "remote" if !value.is_empty() => opts.remote = value.to_string(),
                "branch" if !value.is_empty() => opts.branch = value.to_string(),
                "push-remote" if !value.is_empty() => opts.push_remote = value.to_string(),
                "version-file" if !value.is_empty() => opts.version_file = value.to_string(),
                "strategy" => {
                    if let Some(strategy) = Strategy::parse(value) {
                        opts.strategy = strategy;
                    }
                }
                "no-install" => opts.install = false,
                "no-typecheck" => opts.typecheck = false,
                "no-test" => opts.test = false,
                "dmg-mac" => opts.dmg_mac = true,
                "no-commit" => opts.commit = false,
                "no-push" => opts.push = false,
                "no-auto-stash" => opts.auto_stash = false,
                "dry-run" => opts.dry_run = true,
                _ => {}
            }
        }

        opts
    }

    /// Resolved configuration as pretty JSON, printed by the dry run.
    pub fn to_pretty_json(&self) -> String {
        // Serialize on plain structs with string/bool fields cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
