//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `DeploymentStore` - Reads deployments and the active pointer
//! - `ActivationController` - Retargets the active pointer atomically
//! - `Lifecycle` - Deploy, rollback, clean and friends

pub mod activation;
pub mod lifecycle;
pub mod store;

pub use activation::ActivationController;
pub use lifecycle::{CleanReport, DeployOutcome, DeployReport, Lifecycle, LifecycleSettings};
pub use store::{DeploymentStore, ListedDeployment, ACTIVE_LINK};
