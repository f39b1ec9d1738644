//! Lifecycle Results

use crate::domain::value_objects::Deployment;

/// How a deploy reached the activated deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// A finished deployment for the commit already existed
    CacheHit,
    /// Fetched and built during this call
    Built,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub deployment: Deployment,
    pub outcome: DeployOutcome,
    /// Retention sweep that followed a fresh build
    pub clean: Option<CleanReport>,
}

impl DeployReport {
    pub fn is_cache_hit(&self) -> bool {
        self.outcome == DeployOutcome::CacheHit
    }
}

/// Result of a retention sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Deleted deployments, oldest last
    pub removed: Vec<Deployment>,
    /// Active deployment that sat past the window and was kept
    pub preserved_active: Option<Deployment>,
}

impl CleanReport {
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}
