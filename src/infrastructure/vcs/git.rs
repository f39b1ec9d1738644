//! Git CLI Version Control
//!
//! Implements the VersionControl port by shelling out to `git`.
//! Credentials travel as a per-invocation `http.extraHeader`, so they are
//! never written into a cloned repository's config.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::{debug, info};

use crate::config::{Credentials, RepoConfig};
use crate::domain::ports::VersionControl;
use crate::error::VcsError;

/// Version control backed by the `git` binary
#[derive(Debug, Clone)]
pub struct GitCli {
    url: String,
    auth: Option<Credentials>,
}

impl GitCli {
    pub fn new(url: impl Into<String>, auth: Option<Credentials>) -> Self {
        Self {
            url: url.into(),
            auth,
        }
    }

    pub fn from_config(repo: &RepoConfig) -> Self {
        Self::new(repo.url.clone(), repo.auth.clone())
    }

    /// Base `git` command with auth and prompting disabled
    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(auth) = &self.auth {
            cmd.arg("-c").arg(format!(
                "http.extraHeader=Authorization: {}",
                auth.authorization_header()
            ));
        }
        cmd.env("GIT_TERMINAL_PROMPT", "0").stdin(Stdio::null());
        cmd
    }

    fn run(mut cmd: Command) -> Result<Output, VcsError> {
        cmd.output().map_err(VcsError::Spawn)
    }
}

/// Last line of stderr, or the exit status when git printed nothing
fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| format!("git exited with {}", output.status))
}

impl VersionControl for GitCli {
    fn resolve_revision(&self, revision: &str) -> Result<String, VcsError> {
        let resolve_err = |reason: String| VcsError::Resolve {
            revision: revision.to_string(),
            reason,
        };

        // Throwaway bare clone; removed when `scratch` drops.
        let scratch = tempfile::Builder::new()
            .prefix("mfd-resolve-")
            .tempdir()
            .map_err(|e| resolve_err(e.to_string()))?;

        debug!(url = %self.url, dir = %scratch.path().display(), "cloning for resolve");
        let mut clone = self.git();
        clone
            .args(["clone", "--bare", "--quiet", "--"])
            .arg(&self.url)
            .arg(scratch.path());
        let output = Self::run(clone)?;
        if !output.status.success() {
            return Err(resolve_err(failure_reason(&output)));
        }

        let mut rev_parse = Command::new("git");
        rev_parse
            .arg("--git-dir")
            .arg(scratch.path())
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("{}^{{commit}}", revision))
            .stdin(Stdio::null());
        let output = Self::run(rev_parse)?;
        if !output.status.success() {
            return Err(resolve_err("revision not found".to_string()));
        }

        let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(revision, commit = %commit, "resolved revision");
        Ok(commit)
    }

    fn fetch_and_checkout(&self, commit_hash: &str, destination: &Path) -> Result<(), VcsError> {
        if destination.join(".git").exists() {
            info!(dir = %destination.display(), "repository already exists, skipping clone");
        } else {
            let mut clone = self.git();
            clone
                .args(["clone", "--quiet", "--"])
                .arg(&self.url)
                .arg(destination);
            let output = Self::run(clone)?;
            if !output.status.success() {
                return Err(VcsError::Clone {
                    commit: commit_hash.to_string(),
                    reason: failure_reason(&output),
                });
            }
        }

        // Existing clones are checked out too
        let mut checkout = Command::new("git");
        checkout
            .arg("-C")
            .arg(destination)
            .args(["checkout", "--quiet", "--detach", commit_hash])
            .stdin(Stdio::null());
        let output = Self::run(checkout)?;
        if !output.status.success() {
            return Err(VcsError::Checkout {
                commit: commit_hash.to_string(),
                reason: failure_reason(&output),
            });
        }

        Ok(())
    }
}
