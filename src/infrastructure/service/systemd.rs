//! systemd Service Manager
//!
//! Restarts units with `systemctl restart <unit>`.

use std::path::Path;

use tracing::info;

use crate::domain::ports::{ExitOutcome, ProcessRunner, ServiceManager};
use crate::error::{MfdError, MfdResult};

use crate::infrastructure::process::CommandRunner;

/// Service manager that drives `systemctl` through a process runner
#[derive(Debug, Clone, Default)]
pub struct Systemd<P = CommandRunner> {
    runner: P,
}

impl<P: ProcessRunner> Systemd<P> {
    pub fn new(runner: P) -> Self {
        Self { runner }
    }
}

impl<P: ProcessRunner> ServiceManager for Systemd<P> {
    fn restart(&self, unit: &str) -> MfdResult<()> {
        let argv = vec!["systemctl".to_string(), "restart".to_string(), unit.to_string()];
        info!(unit, "restarting unit");

        let reason = match self.runner.run(&argv, Path::new(".")) {
            Ok(ExitOutcome::Success) => return Ok(()),
            Ok(ExitOutcome::Failure { code: Some(code) }) => format!("exit status {}", code),
            Ok(ExitOutcome::Failure { code: None }) => "terminated by signal".to_string(),
            Err(err) => err.to_string(),
        };

        Err(MfdError::Restart {
            unit: unit.to_string(),
            reason,
        })
    }
}
