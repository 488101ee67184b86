use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_valid_number_uses_default_country() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["validate", "1012345678"])
        .assert()
        .success()
        .stdout(predicate::str::diff("+821012345678\n"));
}

#[test]
fn test_country_flag_overrides_default() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["validate", "--country", "+1", "4155550123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+14155550123"));
}

#[test]
fn test_default_country_comes_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "default_country_code = \"+44\"\n").unwrap();

    cargo_bin_cmd!("nuber")
        .arg("--config")
        .arg(&config_path)
        .args(["validate", "7911123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+447911123456"));
}

#[test]
fn test_invalid_number_fails_with_message() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .env_remove("NUBER_LOG")
        .env_remove("RUST_LOG")
        .args(["validate", "010-1234-5678"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::diff("Phone number is not valid\n"));
}

#[test]
fn test_too_long_number_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["validate", "--country", "+8", "2123456789012"])
        .assert()
        .failure();
}
