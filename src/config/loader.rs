//! Configuration loading and validation

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::BuildCommand;
use crate::error::ConfigError;

use super::types::{BuildConfig, Config, Credentials, RepoConfig, SystemdConfig};

/// Environment variable that overrides `repo.url`
pub const ENV_REPO_URL: &str = "MFD_REPO_URL";

/// Environment variable that overrides `systemd.unit`
pub const ENV_SYSTEMD_UNIT: &str = "MFD_SYSTEMD_UNIT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `repo.tokn`
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    repo: RawRepo,
    #[serde(default)]
    build: RawBuild,
    #[serde(default)]
    systemd: RawSystemd,
}

#[derive(Debug, Default, Deserialize)]
struct RawRepo {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBuild {
    commands: Option<Vec<BuildCommand>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSystemd {
    unit: Option<String>,
}

/// Load a config file with environment overrides applied
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, path, |key| std::env::var(key).ok())
}

/// Parse TOML content; `env` looks up override variables.
pub fn parse<F>(
    content: &str,
    path: &Path,
    env: F,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let mut raw: RawConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    apply_env_overrides(&mut raw, env);

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((validate(raw)?, warnings))
}

fn apply_env_overrides<F>(raw: &mut RawConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_REPO_URL).filter(|v| !v.is_empty()) {
        raw.repo.url = Some(url);
    }
    if let Some(unit) = env(ENV_SYSTEMD_UNIT) {
        raw.systemd.unit = Some(unit);
    }
}

/// Empty strings count as "not set" for optional values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
    let mut missing = Vec::new();
    if raw.repo.url.is_none() {
        missing.push("repo.url".to_string());
    }
    if raw.build.commands.is_none() {
        missing.push("build.commands".to_string());
    }

    let (Some(url), Some(commands)) = (raw.repo.url, raw.build.commands) else {
        return Err(ConfigError::MissingKeys(missing));
    };

    let username = non_empty(raw.repo.username);
    let password = non_empty(raw.repo.password);
    let token = non_empty(raw.repo.token);

    let auth = match (username, password, token) {
        (_, Some(_), Some(_)) => return Err(ConfigError::TokenAndPassword),
        (None, Some(_), None) => return Err(ConfigError::MissingUsername),
        (Some(username), Some(password), None) => Some(Credentials::basic(username, password)),
        (_, None, Some(token)) => Some(Credentials::token(token)),
        (_, None, None) => None,
    };

    if let Some(index) = commands.iter().position(BuildCommand::is_empty) {
        return Err(ConfigError::EmptyBuildCommand { index });
    }

    Ok(Config {
        repo: RepoConfig { url, auth },
        build: BuildConfig { commands },
        systemd: SystemdConfig {
            unit: non_empty(raw.systemd.unit),
        },
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "repo", "url", "username", "password", "token", "build", "commands", "systemd", "unit",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
