//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deployment_root;
pub mod lifecycle_events;
pub mod process_runner;
pub mod service_manager;
pub mod vcs;

pub use deployment_root::{DeploymentRoot, RootEntry, BUILT_MARKER};
pub use lifecycle_events::{LifecycleEvent, LifecycleEventSink, NoopEventSink};
pub use process_runner::{ExitOutcome, ProcessRunner};
pub use service_manager::ServiceManager;
pub use vcs::VersionControl;
