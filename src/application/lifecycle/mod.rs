//! Lifecycle Module
//!
//! Sequences resolve, fetch, build, activate, restart and clean for one
//! working root, plus rollback and the single-deployment operations.
//!
//! ## Structure
//!
//! - `options` - Settings taken from configuration (`LifecycleSettings`)
//! - `result` - Report types (`DeployReport`, `CleanReport`)
//! - `use_case` - The orchestrator (`Lifecycle`)
//!
//! ## Usage
//!
//! ```ignore
//! use mfd::application::lifecycle::{Lifecycle, LifecycleSettings};
//!
//! let lifecycle = Lifecycle::new(root, git, runner, systemd, settings);
//! let commit = lifecycle.resolve("HEAD")?;
//! lifecycle.deploy(&commit)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::LifecycleSettings;
pub use result::{CleanReport, DeployOutcome, DeployReport};
pub use use_case::Lifecycle;
