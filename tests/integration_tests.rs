use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Config path inside a fresh temp dir, so the user's own config is never read
fn isolated_config(contents: Option<&str>) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    if let Some(contents) = contents {
        fs::write(&path, contents).unwrap();
    }
    (dir, path)
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal admin console for the NotifyMe notification service",
        ))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--refresh-interval"));
}

#[test]
fn test_cli_help_lists_screens() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn test_cli_help_hides_api_key_value() {
    cargo_bin_cmd!()
        .env("NOTIFYME_API_KEY", "super-secret-key")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret-key").not());
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notifyme-console"));
}

#[test]
fn test_cli_rejects_unknown_screen() {
    cargo_bin_cmd!()
        .args(["--screen", "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_rejects_zero_refresh_interval() {
    cargo_bin_cmd!()
        .args(["--refresh-interval", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_invalid_base_url() {
    let (_dir, config) = isolated_config(None);

    cargo_bin_cmd!()
        .env_remove("NOTIFYME_API_KEY")
        .arg("--config")
        .arg(&config)
        .args(["--base-url", "ftp://backend.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend URL"));
}

#[test]
fn test_cli_rejects_invalid_base_url_from_config() {
    let (_dir, config) = isolated_config(Some("[server]\nbase_url = \"not a url\"\n"));

    cargo_bin_cmd!()
        .env_remove("NOTIFYME_API_KEY")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend URL"));
}

#[test]
fn test_cli_rejects_api_key_with_control_characters() {
    let (_dir, config) = isolated_config(None);

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--api-key", "bad\nkey"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API key"));
}
