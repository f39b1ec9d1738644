//! ServiceManager port

use crate::error::MfdResult;

/// Restarts a named service unit
pub trait ServiceManager {
    /// Fails with `MfdError::Restart` when the manager reports an error
    fn restart(&self, unit: &str) -> MfdResult<()>;
}
