use std::fs;

use serial_test::serial;
use tempfile::tempdir;

use sync_upstream::config::load_config;
use sync_upstream::options::{Options, Strategy};
use sync_upstream::SyncError;

#[test]
fn test_explicit_path_loads_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sync-upstream.toml");
    fs::write(
        &path,
        r#"
[sync]
remote = "fork"
branch = "develop"
push-remote = "mirror"
strategy = "rebase"

[paths]
version-file = "src/version/app-version.ts"
"#,
    )
    .unwrap();

    let cfg = load_config(Some(path.to_str().unwrap())).unwrap();
    let opts = cfg.apply(Options::default());
    assert_eq!(opts.remote, "fork");
    assert_eq!(opts.branch, "develop");
    assert_eq!(opts.push_remote, "mirror");
    assert_eq!(opts.strategy, Strategy::Rebase);
    assert_eq!(opts.version_file, "src/version/app-version.ts");
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sync-upstream.toml");
    fs::write(&path, "[sync]\nremote = \"fork\"\nbranch = \"develop\"\n").unwrap();

    let cfg = load_config(Some(path.to_str().unwrap())).unwrap();
    let base = cfg.apply(Options::default());
    let opts = Options::parse_from(["--remote=other"], base);
    assert_eq!(opts.remote, "other");
    // not overridden by a flag, so the file value stands
    assert_eq!(opts.branch, "develop");
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        load_config(Some(path.to_str().unwrap())),
        Err(SyncError::Io(_))
    ));
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sync-upstream.toml");
    fs::write(&path, "[sync\nremote =").unwrap();

    assert!(matches!(
        load_config(Some(path.to_str().unwrap())),
        Err(SyncError::Config(_))
    ));
}

#[test]
#[serial]
fn test_working_directory_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sync-upstream.toml"),
        "[sync]\nremote = \"fork\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let opts = result.unwrap().apply(Options::default());
    assert_eq!(opts.remote, "fork");
}

#[test]
#[serial]
fn test_absent_file_yields_defaults() {
    let dir = tempdir().unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let opts = result.unwrap().apply(Options::default());
    assert_eq!(opts, Options::default());
}
