//! Configuration type definitions
//!
//! These are the validated settings; the raw TOML shape lives in `loader`.

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::services::BuildPlan;
use crate::domain::value_objects::BuildCommand;
use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Default config file name, looked up in the working root
pub const CONFIG_FILE_NAME: &str = "mfd.toml";

/// HTTP basic credentials for the repository
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Username sent alongside a bare access token
    pub const TOKEN_USERNAME: &'static str = "mfd";

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::basic(Self::TOKEN_USERNAME, token)
    }

    /// Value for an `Authorization` header
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `[repo]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub url: String,
    pub auth: Option<Credentials>,
}

/// `[build]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub commands: Vec<BuildCommand>,
}

/// `[systemd]` section; `unit = None` disables restarts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemdConfig {
    pub unit: Option<String>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo: RepoConfig,
    pub build: BuildConfig,
    pub systemd: SystemdConfig,
}

impl Config {
    /// Load and validate a config file, discarding warnings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load and validate, collecting unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        loader::parse(content, Path::new(CONFIG_FILE_NAME), |_| None).map(|(config, _)| config)
    }

    pub fn build_plan(&self) -> BuildPlan {
        BuildPlan::new(self.build.commands.clone())
    }
}
