//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_command;
mod deployment;

pub use build_command::BuildCommand;
pub use deployment::Deployment;
