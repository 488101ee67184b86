use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("nuber")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("phone"))
        .stdout(predicate::str::contains("facebook"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("nuber")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_phone_requires_number() {
    cargo_bin_cmd!("nuber")
        .arg("phone")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NUMBER"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("nuber")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
