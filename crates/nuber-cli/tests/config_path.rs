use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_path_honours_flag() {
    let dir = tempdir().unwrap();
    let custom = dir.path().join("custom.toml");

    cargo_bin_cmd!("nuber")
        .arg("--config")
        .arg(&custom)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("default_country_code = \"+82\""));
    assert!(contents.contains("verify_redirect_delay_ms = 4000"));
}

#[test]
fn test_config_init_refuses_existing_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "verify_path = \"/custom\"\n").unwrap();

    cargo_bin_cmd!("nuber")
        .env("NUBER_HOME", dir.path())
        .env_remove("NUBER_CONFIG")
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(fs::read_to_string(&config_path).unwrap().contains("/custom"));
}
