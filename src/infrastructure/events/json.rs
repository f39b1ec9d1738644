//! JSON Event Sink
//!
//! Outputs lifecycle events as NDJSON for automation consumption.

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};
use crate::domain::value_objects::Deployment;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn deployment_event(event: &str, deployment: &Deployment) -> serde_json::Value {
    serde_json::json!({
        "event": event,
        "deployment": deployment.name(),
        "commit": deployment.commit_hash(),
        "created_at": deployment.created_at(),
    })
}

/// JSON object for an event
pub fn event_to_json(event: &LifecycleEvent) -> serde_json::Value {
    match event {
        LifecycleEvent::Resolved { revision, commit } => serde_json::json!({
            "event": "resolved",
            "revision": revision,
            "commit": commit,
        }),
        LifecycleEvent::CacheHit { deployment } => deployment_event("cache_hit", deployment),
        LifecycleEvent::Fetching { deployment } => deployment_event("fetching", deployment),
        LifecycleEvent::BuildStep {
            index,
            total,
            command,
        } => serde_json::json!({
            "event": "build_step",
            "index": index,
            "total": total,
            "command": command.argv(),
        }),
        LifecycleEvent::Activating { deployment } => deployment_event("activating", deployment),
        LifecycleEvent::Restarting { unit } => serde_json::json!({
            "event": "restarting",
            "unit": unit,
        }),
        LifecycleEvent::Removing { deployment } => deployment_event("removing", deployment),
        LifecycleEvent::SkippedActive { deployment } => {
            deployment_event("skipped_active", deployment)
        }
        LifecycleEvent::RollingBack { deployment } => {
            deployment_event("rolling_back", deployment)
        }
    }
}

impl LifecycleEventSink for JsonEventSink {
    fn on_event(&self, event: LifecycleEvent) {
        self.write_event(event_to_json(&event));
    }
}
