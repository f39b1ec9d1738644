//! Deployment Root Implementations
//!
//! Concrete implementations of the DeploymentRoot port.

mod local;
mod memory;

pub use local::LocalRoot;
pub use memory::MemoryRoot;
