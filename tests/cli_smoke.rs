//! Behavioural smoke tests for the CLI entrypoint.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn cli_without_arguments_prints_usage() {
    let mut cmd = cargo_bin_cmd!("nebius-rs");
    cmd.assert().failure().stderr(contains("Usage"));
}

#[test]
fn cli_reports_a_missing_nebius_binary() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let missing = dir.path().join("nebius");
    let mut cmd = cargo_bin_cmd!("nebius-rs");
    cmd.current_dir(dir.path())
        .env("NEBIUS_BINARY", &missing)
        .arg("version");
    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("nebius CLI not found"));
}
