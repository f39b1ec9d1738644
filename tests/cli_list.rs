//! Integration tests for `mfd list`.

#![cfg(unix)]

mod common;

use common::TestRoot;

#[test]
fn list_shows_newest_first_with_active_marker() {
    let root = TestRoot::new();
    let older = root.seed(100, 'a');
    let newer = root.seed(200, 'b');
    root.set_active(&newer);
    std::fs::create_dir(root.path().join("not-a-deployment")).unwrap();

    let result = root.run(&["list"]);

    assert!(result.success, "stdout: {}\nstderr: {}", result.stdout, result.stderr);
    assert_eq!(
        result.stdout,
        format!("{} (active)\n{}\n", newer, older)
    );
}

#[test]
fn ls_alias_with_json() {
    let root = TestRoot::new();
    let name = root.seed(100, 'a');

    let result = root.run(&["ls", "--json"]);

    assert!(result.success);
    let value: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(value["deployments"][0]["deployment"], name);
    assert_eq!(value["deployments"][0]["active"], false);
}

#[test]
fn list_without_config_fails_on_stdout() {
    let root = TestRoot::empty();

    let result = root.run(&["list"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stdout.contains("error reading configuration"),
        "stdout: {}",
        result.stdout
    );
}

#[test]
fn list_reports_missing_config_keys() {
    let root = TestRoot::with_config("[systemd]\nunit = \"app\"\n");

    let result = root.run(&["list"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stdout
            .contains("missing config values: repo.url, build.commands"),
        "stdout: {}",
        result.stdout
    );
}

#[test]
fn list_with_garbled_active_pointer_fails() {
    let root = TestRoot::new();
    root.seed(100, 'a');
    root.set_active("garbage");

    let result = root.run(&["list"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("invalid deployment: garbage"));
}
