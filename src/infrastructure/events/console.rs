//! Console Event Sink
//!
//! Prints one human-readable line per lifecycle event.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};

/// Event sink that writes plain text lines to stdout
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

/// Text line for an event
pub fn render_event(event: &LifecycleEvent) -> String {
    match event {
        LifecycleEvent::Resolved { revision, commit } => {
            format!("Resolved {} to {}", revision, commit)
        }
        LifecycleEvent::CacheHit { deployment } => {
            format!("Deployment already exists: {}", deployment.commit_hash())
        }
        LifecycleEvent::Fetching { deployment } => {
            format!("Fetching commit {} into {}", deployment.commit_hash(), deployment)
        }
        LifecycleEvent::BuildStep {
            index,
            total,
            command,
        } => format!("[{}/{}] {}", index + 1, total, command),
        LifecycleEvent::Activating { deployment } => {
            format!("Activating deployment: {}", deployment.commit_hash())
        }
        LifecycleEvent::Restarting { unit } => format!("Restarting: {}", unit),
        LifecycleEvent::Removing { deployment } => {
            format!("Removing deployment: {}", deployment.commit_hash())
        }
        LifecycleEvent::SkippedActive { deployment } => format!(
            "Skipping removal of active deployment: {}",
            deployment.commit_hash()
        ),
        LifecycleEvent::RollingBack { deployment } => {
            format!("Rolling back to {}", deployment.commit_hash())
        }
    }
}

impl LifecycleEventSink for ConsoleEventSink {
    fn on_event(&self, event: LifecycleEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render_event(&event));
            let _ = writer.flush();
        }
    }
}
