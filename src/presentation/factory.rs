//! Lifecycle Factory
//!
//! Wires the lifecycle orchestrator to its real infrastructure.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{Lifecycle, LifecycleSettings};
use crate::config::Config;
use crate::domain::ports::LifecycleEventSink;
use crate::infrastructure::{
    CommandRunner, ConsoleEventSink, GitCli, JsonEventSink, LocalRoot, Systemd,
};

/// Type alias for the Lifecycle with all real dependencies
pub type ConcreteLifecycle = Lifecycle<LocalRoot, GitCli, CommandRunner, Systemd>;

/// Event sink for the chosen output mode
pub fn create_event_sink(json: bool) -> Arc<dyn LifecycleEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout())
    }
}

/// Create a lifecycle for `root` configured by `config`.
///
/// In JSON mode child process stdout goes to stderr so stdout carries only
/// NDJSON.
pub fn create_lifecycle(root: LocalRoot, config: &Config, json: bool) -> ConcreteLifecycle {
    let runner = CommandRunner::new().with_stdout_to_stderr(json);
    let git = GitCli::from_config(&config.repo);
    let systemd = Systemd::new(runner);

    Lifecycle::new(
        root,
        git,
        runner,
        systemd,
        LifecycleSettings::from_config(config),
    )
    .with_events(create_event_sink(json))
}
