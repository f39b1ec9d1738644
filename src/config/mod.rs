//! Configuration module for mfd
//!
//! Configuration sources, highest priority first:
//! 1. Environment variables (`MFD_REPO_URL`, `MFD_SYSTEMD_UNIT`)
//! 2. Config file (`--config`, `MFD_CONFIG`, or `./mfd.toml`)

mod loader;
mod types;

pub use loader::{parse, ConfigWarning, ENV_REPO_URL, ENV_SYSTEMD_UNIT};
pub use types::{
    BuildConfig, Config, Credentials, RepoConfig, SystemdConfig, CONFIG_FILE_NAME,
};
