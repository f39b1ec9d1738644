//! Lifecycle Settings

use crate::config::Config;
use crate::domain::services::{BuildPlan, RetentionPolicy};

/// Everything the orchestrator needs from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleSettings {
    /// Commands run inside every freshly fetched deployment
    pub plan: BuildPlan,
    /// Service restarted after activation; `None` disables restarts
    pub unit: Option<String>,
    pub retention: RetentionPolicy,
}

impl LifecycleSettings {
    pub fn new(plan: BuildPlan) -> Self {
        Self {
            plan,
            ..Self::default()
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            plan: config.build_plan(),
            unit: config.systemd.unit.clone(),
            retention: RetentionPolicy::default(),
        }
    }
}
