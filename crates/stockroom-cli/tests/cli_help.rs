use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_commands() {
    cargo_bin_cmd!("stockroom")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--collection"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("stockroom")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    cargo_bin_cmd!("stockroom")
        .arg("restock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    // assert_cmd captures stdout, so there is no terminal to draw on.
    cargo_bin_cmd!("stockroom")
        .env("STOCKROOM_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires an interactive terminal"));
}
