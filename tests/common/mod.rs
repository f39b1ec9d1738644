//! Common test utilities for mfd CLI tests.
//!
//! Provides `TestRoot`: an isolated working root in a temp directory, with
//! helpers to seed deployments and run the `mfd` binary against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Config with no systemd unit and a no-op build
pub const MINIMAL_CONFIG: &str = r#"
[repo]
url = "https://example.invalid/app.git"

[build]
commands = [["true"]]
"#;

/// Result of running the mfd binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestRoot {
    pub dir: TempDir,
}

impl TestRoot {
    /// Empty root without a config file
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Root with `MINIMAL_CONFIG` as mfd.toml
    pub fn new() -> Self {
        Self::with_config(MINIMAL_CONFIG)
    }

    pub fn with_config(config: &str) -> Self {
        let root = Self::empty();
        fs::write(root.path().join("mfd.toml"), config).unwrap();
        root
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a built deployment directory; returns its name
    pub fn seed(&self, created_at: i64, hash_char: char) -> String {
        let name = format!("mfd_{}_{}", created_at, hash_char.to_string().repeat(40));
        let dir = self.path().join(&name);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(".mfd-built"), "").unwrap();
        name
    }

    #[cfg(unix)]
    pub fn set_active(&self, name: &str) {
        std::os::unix::fs::symlink(name, self.path().join("active")).unwrap();
    }

    pub fn active(&self) -> Option<String> {
        fs::read_link(self.path().join("active"))
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Deployment directory names, sorted
    pub fn deployments(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().unwrap().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("mfd_"))
            .collect();
        names.sort();
        names
    }

    /// Run mfd with `--root` pointing here
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(bin())
            .arg("--root")
            .arg(self.path())
            .args(args)
            .env_remove("MFD_CONFIG")
            .env_remove("MFD_REPO_URL")
            .env_remove("MFD_SYSTEMD_UNIT")
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mfd"))
}
