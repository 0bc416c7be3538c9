//! CLI integration tests

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn push_bridge_bin() -> Command {
    Command::cargo_bin("push-bridge").unwrap()
}

/// Point the process at a scratch config dir and strip ambient credentials
fn isolate<'a>(cmd: &'a mut Command, dir: &Path) -> &'a mut Command {
    cmd.env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("PUSH_BRIDGE_API_KEY")
}

#[test]
fn help_output() {
    push_bridge_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notifications"))
        .stdout(predicate::str::contains("--icon"))
        .stdout(predicate::str::contains("--notifier"))
        .stdout(predicate::str::contains("--service-url"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("send"));
}

#[test]
fn version_output() {
    push_bridge_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("push-bridge"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help() {
    push_bridge_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("push-bridge"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_creates_file_then_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(dir.path().join("push-bridge").join("config.toml").exists());

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_init_seeds_default_icon() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "get", "icon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/icons/Icon-192.png"));
}

#[test]
fn config_set_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "set", "project_id", "demo-project"])
        .assert()
        .success();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "get", "project_id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-project"));
}

#[test]
fn config_get_unset_key_reports_not_set() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "get", "sender_id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_get_masks_api_key() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "set", "api_key", "abcdefghijklmnop"])
        .assert()
        .success();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd...mnop"))
        .stdout(predicate::str::contains("abcdefghijklmnop").not());
}

#[test]
fn config_list_shows_every_key() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "set", "app_id", "demo-app-1"])
        .assert()
        .success();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key"))
        .stdout(predicate::str::contains("project_id"))
        .stdout(predicate::str::contains("sender_id"))
        .stdout(predicate::str::contains("app_id"))
        .stdout(predicate::str::contains("demo-app-1"))
        .stdout(predicate::str::contains("service_url"))
        .stdout(predicate::str::contains("icon"))
        .stdout(predicate::str::contains("notifier"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "get", "volume"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_rejects_invalid_notifier() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "set", "notifier", "growl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("growl"));
}

#[test]
fn config_rejects_invalid_service_url() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["config", "set", "service_url", "relay.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http://"));
}

#[test]
fn worker_without_api_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"))
        .stderr(predicate::str::contains("PUSH_BRIDGE_API_KEY"));
}

#[test]
fn worker_with_env_key_still_needs_project_id() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .env("PUSH_BRIDGE_API_KEY", "test-api-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing project ID"));
}

#[test]
fn send_without_title_is_a_usage_error() {
    push_bridge_bin()
        .arg("send")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn invalid_notifier_flag_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    isolate(&mut push_bridge_bin(), dir.path())
        .args(["--notifier", "growl"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("growl"));
}

// Note: a successful `send` pops a real desktop notification, so the happy
// path is covered by unit tests on the notifier adapters instead.
