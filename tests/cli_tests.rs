//! CLI integration tests
//!
//! Each test runs against its own JAMIRA_HOME; server calls go to a local mock.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command for the jamira binary rooted at `home`
fn jamira(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jamira").unwrap();
    cmd.env("JAMIRA_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("JAMIRA_PASSWORD");
    cmd
}

fn add_account(home: &Path, name: &str, uri: &str) {
    jamira(home)
        .args(["account", "add", name, "jdoe", uri, "--password", "secret"])
        .assert()
        .success();
}

const PRIORITIES: &str = r##"[
  {"self": "http://localhost/rest/api/2/priority/1", "id": "1", "name": "High", "statusColor": "#ff0000"},
  {"self": "http://localhost/rest/api/2/priority/2", "id": "2", "name": "Low", "statusColor": "#00ff00"}
]"##;

// ─────────────────────────────────────────────────────────────────────────────
// Help and Usage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("local metadata cache"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jamira"));
}

#[test]
fn test_list_help() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-types"))
        .stdout(predicate::str::contains("priorities"))
        .stdout(predicate::str::contains("--account"));
}

#[test]
fn test_cache_help() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["cache", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn test_invalid_command() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_list_target() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["list", "projects"])
        .assert()
        .failure();
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jamira"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Accounts and Config
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_account_add_and_list() {
    let home = TempDir::new().unwrap();
    add_account(home.path(), "work", "https://jira.example.com");

    jamira(home.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work"))
        .stdout(predicate::str::contains("jira.example.com"))
        .stdout(predicate::str::contains("secret").not());

    assert!(home.path().join("accounts").join("work.toml").exists());
}

#[test]
fn test_account_add_duplicate_fails() {
    let home = TempDir::new().unwrap();
    add_account(home.path(), "work", "https://jira.example.com");

    jamira(home.path())
        .args(["account", "add", "work", "jdoe", "https://jira.example.com", "--password", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Account already exists"));
}

#[test]
fn test_list_without_account() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["list", "priorities"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No account configured"));
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    jamira(home.path())
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"statuses\": \"24h\""))
        .stdout(predicate::str::contains("\"issue-types\": \"30d\""));
}

#[test]
fn test_invalid_ttl_in_config() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[cache.ttl]\nstatuses = \"whenever\"\n",
    )
    .unwrap();

    jamira(home.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TTL format"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Cached Metadata
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_cache_status_without_cache() {
    let home = TempDir::new().unwrap();
    add_account(home.path(), "work", "https://jira.example.com");

    jamira(home.path())
        .args(["cache", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not cached"));
}

#[test]
fn test_list_priorities_is_cached() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/priority")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PRIORITIES)
        .expect(1)
        .create();
    add_account(home.path(), "work", &server.url());

    for _ in 0..2 {
        jamira(home.path())
            .args(["list", "priorities"])
            .assert()
            .success()
            .stdout(predicate::str::contains("High"))
            .stdout(predicate::str::contains("Low"));
    }

    mock.assert();
    let cache_file = home.path().join("cache").join("work").join("priorities.json");
    assert!(cache_file.exists());
}

#[test]
fn test_cache_clear_forces_refetch() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/priority")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PRIORITIES)
        .expect(2)
        .create();
    add_account(home.path(), "work", &server.url());

    jamira(home.path()).args(["list", "priorities"]).assert().success();
    jamira(home.path())
        .args(["cache", "clear", "--account", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache cleared"));
    jamira(home.path()).args(["list", "priorities"]).assert().success();

    mock.assert();
}

#[test]
fn test_server_error_exit_code() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/rest/api/2/status")
        .with_status(401)
        .with_body("Unauthorized")
        .create();
    add_account(home.path(), "work", &server.url());

    jamira(home.path())
        .args(["list", "statuses"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HTTP 401"))
        .stderr(predicate::str::contains("hint"));

    assert!(!home.path().join("cache").join("work").join("statuses.json").exists());
}

#[test]
fn test_corrupt_cache_file_suggests_clear() {
    let home = TempDir::new().unwrap();
    add_account(home.path(), "work", "https://jira.example.com");
    let dir = home.path().join("cache").join("work");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("resolutions.json"), "not json").unwrap();

    jamira(home.path())
        .args(["list", "resolutions"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read cache file"))
        .stderr(predicate::str::contains("jamira cache clear"));
}

#[test]
fn test_unwritable_cache_still_lists_priorities() {
    let home = TempDir::new().unwrap();
    let blocked = home.path().join("blocked");
    fs::write(&blocked, "").unwrap();
    fs::write(
        home.path().join("config.toml"),
        format!("[cache]\ndir = {:?}\n", blocked.display().to_string()),
    )
    .unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/rest/api/2/priority")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PRIORITIES)
        .create();
    add_account(home.path(), "work", &server.url());

    jamira(home.path())
        .args(["list", "priorities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High"))
        .stdout(predicate::str::contains("Low"))
        .stderr(predicate::str::contains("Could not update metadata cache"));
}

#[test]
fn test_list_priority_by_name() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/rest/api/2/priority")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PRIORITIES)
        .create();
    add_account(home.path(), "work", &server.url());

    jamira(home.path())
        .args(["list", "priorities", "--name", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Low"))
        .stdout(predicate::str::contains("High").not());

    jamira(home.path())
        .args(["list", "priorities", "--name", "Blocker"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such priority: Blocker"));
}

#[test]
fn test_name_filter_rejected_for_other_lists() {
    let home = TempDir::new().unwrap();
    add_account(home.path(), "work", "https://jira.example.com");

    jamira(home.path())
        .args(["list", "statuses", "--name", "Open"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--name only applies"));
}
