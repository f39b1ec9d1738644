//! Lifecycle Event Port
//!
//! Progress reporting for lifecycle operations. The orchestrator emits
//! events; the CLI decides whether they become text, NDJSON, or nothing.

use crate::domain::value_objects::{BuildCommand, Deployment};

/// Event emitted during lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A revision was resolved to a commit
    Resolved { revision: String, commit: String },

    /// A deployment for the commit already exists; fetch and build are skipped
    CacheHit { deployment: Deployment },

    /// Fetch into a new deployment directory started
    Fetching { deployment: Deployment },

    /// A build command is about to run
    BuildStep {
        index: usize,
        total: usize,
        command: BuildCommand,
    },

    /// The active pointer is being retargeted
    Activating { deployment: Deployment },

    /// The service unit is being restarted
    Restarting { unit: String },

    /// A deployment directory is being deleted
    Removing { deployment: Deployment },

    /// Retention would have removed this deployment but it is active
    SkippedActive { deployment: Deployment },

    /// Rollback target chosen
    RollingBack { deployment: Deployment },
}

/// Trait for receiving lifecycle events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stdout
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait LifecycleEventSink: Send + Sync {
    fn on_event(&self, event: LifecycleEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LifecycleEventSink for NoopEventSink {
    fn on_event(&self, _event: LifecycleEvent) {}
}
