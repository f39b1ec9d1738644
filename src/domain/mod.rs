//! Domain Layer
//!
//! Pure deployment rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Deployment identity, build commands
//! - `services/` - Ordering, retention, build sequencing
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
