//! mfd - single-host deployment lifecycle manager
//!
//! Fetches a commit into its own directory, builds it, points the `active`
//! symlink at it, restarts the service and prunes old deployments. Rollback
//! repoints `active` at the previous deployment.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeploymentStore, Lifecycle, LifecycleSettings, ListedDeployment};
pub use config::Config;
pub use domain::value_objects::Deployment;
pub use error::{MfdError, MfdResult};
