//! Shared command setup: working root, config file, lifecycle wiring.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use mfd::config::{Config, ConfigWarning, CONFIG_FILE_NAME};
use mfd::domain::ports::DeploymentRoot;
use mfd::error::{MfdError, MfdResult};
use mfd::infrastructure::LocalRoot;
use mfd::presentation::{create_lifecycle, Cli, ConcreteLifecycle};

pub struct CommandContext {
    pub json: bool,
    pub root: LocalRoot,
    pub config_path: PathBuf,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(dir) => LocalRoot::new(dir),
            None => LocalRoot::current_dir().map_err(MfdError::from)?,
        };
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| root.path_of(CONFIG_FILE_NAME));

        debug!(root = %root.root().display(), config = %config_path.display(), "command context");
        Ok(Self {
            json: cli.json,
            root,
            config_path,
        })
    }

    pub fn load_config(&self) -> MfdResult<Config> {
        let (config, warnings) = Config::load_with_warnings(&self.config_path)?;
        for warning in &warnings {
            report_warning(warning);
        }
        Ok(config)
    }

    /// Lifecycle wired to the real infrastructure
    pub fn lifecycle(&self) -> MfdResult<ConcreteLifecycle> {
        let config = self.load_config()?;
        Ok(create_lifecycle(self.root.clone(), &config, self.json))
    }
}

fn report_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => warn!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => warn!("unknown config key '{}' in {}", warning.key, location),
    }
}
