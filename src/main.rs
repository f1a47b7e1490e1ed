use std::env;

use anyhow::Result;

use sync_upstream::config;
use sync_upstream::options::Options;
use sync_upstream::shell::Shell;
use sync_upstream::tasks::BunRunner;
use sync_upstream::ui;
use sync_upstream::vcs::GitCli;
use sync_upstream::workflow::SyncWorkflow;

const USAGE: &str = "\
sync-upstream - fetch and integrate an upstream remote, reconcile the app version, verify, push

Usage: sync-upstream [flags]

Flags (all optional, --key=value or bare toggles; unknown flags are ignored):
  --remote=<name>        upstream remote to sync from (default: upstream)
  --branch=<name>        branch to sync (default: main)
  --push-remote=<name>   remote to push to (default: origin)
  --strategy=merge|rebase  integration strategy (default: merge)
  --version-file=<path>  file carrying APP_VERSION
  --config=<path>        explicit sync-upstream.toml
  --no-install           skip dependency install
  --no-typecheck         skip type-check
  --no-test              skip test run
  --dmg-mac              build the macOS distribution package
  --no-commit            skip the sync commit
  --no-push              skip pushing
  --no-auto-stash        fail instead of stashing a dirty tree
  --dry-run              print the resolved configuration and exit
";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{USAGE}");
        return Ok(());
    }
    if args.iter().any(|a| a == "--version") {
        println!("sync-upstream {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // The config file must be resolved before flag parsing so flags can
    // override its values.
    let config_path = args
        .iter()
        .find_map(|a| a.strip_prefix("--config="))
        .map(|p| p.trim())
        .filter(|p| !p.is_empty());

    let file_config = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let opts = Options::parse_from(&args, file_config.apply(Options::default()));

    let shell = Shell::new(env::current_dir()?);
    let vcs = GitCli::new(shell.clone());
    let tasks = BunRunner::new(shell);

    match SyncWorkflow::new(&vcs, &tasks, &opts).run() {
        Ok(outcome) if outcome.dry_run => Ok(()),
        Ok(outcome) => {
            let mut summary = format!("Synced {} into '{}'", opts.remote, opts.branch);
            if let Some(version) = &outcome.version_written {
                summary.push_str(&format!(", version -> {version}"));
            }
            if outcome.pushed {
                summary.push_str(&format!(", pushed to {}", opts.push_remote));
            }
            ui::display_success(&summary);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
