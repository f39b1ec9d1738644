//! Deployment Store
//!
//! Reads the working root: which deployments exist, in which order, and
//! which one the active pointer designates. Re-reads on every call; nothing
//! is cached between operations.

use tracing::debug;

use crate::domain::ports::DeploymentRoot;
use crate::domain::services::{find_by_commit_hash, sort_newest_first};
use crate::domain::value_objects::Deployment;
use crate::error::{MfdError, MfdResult};

/// Name of the active pointer symlink
pub const ACTIVE_LINK: &str = "active";

/// A deployment annotated with whether the active pointer targets it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedDeployment {
    pub deployment: Deployment,
    pub active: bool,
}

pub struct DeploymentStore<'a, R: DeploymentRoot + ?Sized> {
    root: &'a R,
}

impl<'a, R: DeploymentRoot + ?Sized> DeploymentStore<'a, R> {
    pub fn new(root: &'a R) -> Self {
        Self { root }
    }

    /// Every valid deployment directory, newest first.
    ///
    /// Non-directories and names that fail identity parsing are skipped.
    pub fn list(&self) -> MfdResult<Vec<Deployment>> {
        let mut deployments: Vec<Deployment> = self
            .root
            .entries()?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .filter_map(|entry| match Deployment::parse(&entry.name) {
                Ok(dep) => Some(dep),
                Err(_) => {
                    debug!(name = %entry.name, "ignoring non-deployment directory");
                    None
                }
            })
            .collect();

        sort_newest_first(&mut deployments);
        Ok(deployments)
    }

    /// Newest deployment in `deployments` built from `commit_hash`
    pub fn find_by_commit_hash(
        deployments: &[Deployment],
        commit_hash: &str,
    ) -> MfdResult<Deployment> {
        find_by_commit_hash(deployments, commit_hash)
            .cloned()
            .ok_or_else(|| MfdError::DeploymentNotFound {
                what: commit_hash.to_string(),
            })
    }

    /// The active deployment, `None` when no pointer exists.
    ///
    /// A pointer whose target is not a valid identity is an error.
    pub fn active(&self) -> MfdResult<Option<Deployment>> {
        match self.root.read_link(ACTIVE_LINK)? {
            Some(target) => Deployment::parse(&target).map(Some),
            None => Ok(None),
        }
    }

    /// The active deployment, failing with `NoActiveDeployment` when absent
    pub fn active_deployment(&self) -> MfdResult<Deployment> {
        self.active()?.ok_or(MfdError::NoActiveDeployment)
    }

    /// The listing annotated with the active marker
    pub fn annotated(&self) -> MfdResult<Vec<ListedDeployment>> {
        let active = self.active()?;
        Ok(self
            .list()?
            .into_iter()
            .map(|deployment| ListedDeployment {
                active: active.as_ref() == Some(&deployment),
                deployment,
            })
            .collect())
    }
}
