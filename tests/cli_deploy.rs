//! Integration tests for `mfd deploy` and `mfd resolve` against a local
//! upstream repository. Skipped when `git` is not installed.

#![cfg(unix)]

mod common;

use std::path::Path;
use std::process::{Command, Stdio};

use common::TestRoot;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "mfd")
        .env("GIT_AUTHOR_EMAIL", "mfd@example.com")
        .env("GIT_COMMITTER_NAME", "mfd")
        .env("GIT_COMMITTER_EMAIL", "mfd@example.com")
        .output()
        .unwrap();
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Upstream with tag `v1` on the first commit; returns (dir, first, head)
fn upstream() -> (tempfile::TempDir, String, String) {
    let dir = tempfile::tempdir().unwrap();
    git_in(dir.path(), &["init", "--quiet"]);
    std::fs::write(dir.path().join("app.txt"), "v1").unwrap();
    git_in(dir.path(), &["add", "."]);
    git_in(dir.path(), &["commit", "--quiet", "-m", "first"]);
    let first = git_in(dir.path(), &["rev-parse", "HEAD"]);
    git_in(dir.path(), &["tag", "v1"]);
    std::fs::write(dir.path().join("app.txt"), "v2").unwrap();
    git_in(dir.path(), &["commit", "--quiet", "-am", "second"]);
    let head = git_in(dir.path(), &["rev-parse", "HEAD"]);
    (dir, first, head)
}

fn config_for(upstream: &Path, build: &str) -> String {
    format!(
        "[repo]\nurl = '{}'\n\n[build]\ncommands = {}\n",
        upstream.display(),
        build
    )
}

#[test]
fn resolve_prints_only_the_hash() {
    if !git_available() {
        return;
    }
    let (repo, first, head) = upstream();
    let root = TestRoot::with_config(&config_for(repo.path(), r#"[["true"]]"#));

    let result = root.run(&["resolve"]);
    assert!(result.success, "stdout: {}", result.stdout);
    assert_eq!(result.stdout, format!("{}\n", head));

    let result = root.run(&["resolve", "v1"]);
    assert_eq!(result.stdout.trim(), first);
}

#[test]
fn deploy_fetches_builds_and_activates() {
    if !git_available() {
        return;
    }
    let (repo, first, _) = upstream();
    let root = TestRoot::with_config(&config_for(
        repo.path(),
        r#"[["sh", "-c", "cp app.txt built.txt"]]"#,
    ));

    let result = root.run(&["deploy", "v1"]);

    assert!(result.success, "stdout: {}\nstderr: {}", result.stdout, result.stderr);
    assert!(result.stdout.contains(&format!("Resolved v1 to {}", first)));

    let active = root.active().unwrap();
    assert!(active.starts_with("mfd_"));
    assert!(active.ends_with(&first));
    let built = std::fs::read_to_string(root.path().join("active/built.txt")).unwrap();
    assert_eq!(built, "v1");
}

#[test]
fn deploy_same_revision_twice_reuses_deployment() {
    if !git_available() {
        return;
    }
    let (repo, _, head) = upstream();
    let root = TestRoot::with_config(&config_for(repo.path(), r#"[["true"]]"#));

    assert!(root.run(&["deploy"]).success);
    let result = root.run(&["deploy"]);

    assert!(result.success);
    assert!(result
        .stdout
        .contains(&format!("Deployment already exists: {}", head)));
    assert_eq!(root.deployments().len(), 1);
}

#[test]
fn failing_build_is_not_activated() {
    if !git_available() {
        return;
    }
    let (repo, _, _) = upstream();
    let root = TestRoot::with_config(&config_for(
        repo.path(),
        r#"[["false"], ["touch", "never"]]"#,
    ));

    let result = root.run(&["deploy"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("false"), "stdout: {}", result.stdout);
    assert_eq!(root.active(), None);
    let deployments = root.deployments();
    assert_eq!(deployments.len(), 1);
    assert!(!root.path().join(&deployments[0]).join("never").exists());
}

#[test]
fn deploy_json_keeps_stdout_machine_readable() {
    if !git_available() {
        return;
    }
    let (repo, _, head) = upstream();
    let root = TestRoot::with_config(&config_for(
        repo.path(),
        r#"[["echo", "building"]]"#,
    ));

    let result = root.run(&["deploy", "--json"]);

    assert!(result.success, "stdout: {}", result.stdout);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["event"], "resolved");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "deploy_complete");
    assert_eq!(last["commit"], head);
    // Build output went to stderr
    assert!(result.stderr.contains("building"));
}

#[test]
fn unknown_revision_fails() {
    if !git_available() {
        return;
    }
    let (repo, _, _) = upstream();
    let root = TestRoot::with_config(&config_for(repo.path(), r#"[["true"]]"#));

    let result = root.run(&["deploy", "no-such-branch"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("no-such-branch"), "stdout: {}", result.stdout);
    assert!(root.deployments().is_empty());
}
