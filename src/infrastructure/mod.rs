//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Deployment roots (local directory, in-memory)
//! - `vcs/` - Version control via the `git` binary
//! - `process/` - Build command execution
//! - `service/` - Service manager (systemd)
//! - `events/` - Lifecycle event sinks (console, NDJSON)

pub mod events;
pub mod fs;
pub mod process;
pub mod service;
pub mod vcs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalRoot, MemoryRoot};
pub use process::CommandRunner;
pub use service::Systemd;
pub use vcs::GitCli;
