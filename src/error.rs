//! Error types for mfd
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mfd operations
pub type MfdResult<T> = Result<T, MfdError>;

/// Main error type for mfd operations
#[derive(Error, Debug)]
pub enum MfdError {
    /// Configuration could not be loaded or failed validation
    #[error("error reading configuration: {0}")]
    Config(#[from] ConfigError),

    /// A name that was expected to be a deployment identity is malformed
    #[error("invalid deployment: {name}")]
    InvalidIdentity { name: String },

    /// No deployment matches the requested key
    #[error("deployment not found: {what}")]
    DeploymentNotFound { what: String },

    /// The `active` symlink does not exist
    #[error("active deployment not found")]
    NoActiveDeployment,

    /// Rollback was requested while the oldest deployment is active
    #[error("no previous deployment found")]
    NoPreviousDeployment,

    /// Version control operation failed
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// A build command failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Service manager restart failed
    #[error("error restarting systemd unit {unit}: {reason}")]
    Restart { unit: String, reason: String },

    /// Explicit removal of the deployment the active pointer targets
    #[error("cannot remove active deployment: {name}")]
    CannotRemoveActive { name: String },

    /// Filesystem error, propagated as-is
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Required keys absent from the file, reported together
    #[error("missing config values: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("cannot specify both password and token for authentication")]
    TokenAndPassword,

    #[error("username must be specified when using password authentication")]
    MissingUsername,

    #[error("build.commands[{index}] is empty")]
    EmptyBuildCommand { index: usize },
}

/// Version control failures, tagged with the revision or commit involved
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("error resolving revision {revision}: {reason}")]
    Resolve { revision: String, reason: String },

    #[error("error cloning repository for commit {commit}: {reason}")]
    Clone { commit: String, reason: String },

    #[error("error checking out commit {commit}: {reason}")]
    Checkout { commit: String, reason: String },

    #[error("cannot run git: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Build step failures, identified by the command line that failed
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("error running build command {command}: {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },

    #[error("error running build command {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
