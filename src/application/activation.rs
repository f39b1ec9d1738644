//! Activation Controller
//!
//! Owns the `active` pointer. Retargeting creates the new symlink under a
//! temporary name and renames it over the old one, so readers always see
//! either the old target or the new one, never a missing pointer.

use std::io;

use tracing::{debug, info, warn};

use crate::domain::ports::DeploymentRoot;
use crate::domain::value_objects::Deployment;
use crate::error::MfdResult;

use super::store::ACTIVE_LINK;

pub struct ActivationController<'a, R: DeploymentRoot + ?Sized> {
    root: &'a R,
}

impl<'a, R: DeploymentRoot + ?Sized> ActivationController<'a, R> {
    pub fn new(root: &'a R) -> Self {
        Self { root }
    }

    /// Hidden staging name; hidden entries never parse as deployments
    fn staging_name() -> String {
        format!(".{}.{}.tmp", ACTIVE_LINK, std::process::id())
    }

    /// Point `active` at `deployment`
    pub fn activate(&self, deployment: &Deployment) -> MfdResult<()> {
        let target = deployment.name();
        let staging = Self::staging_name();

        // Leftover from an interrupted run with the same pid
        match self.root.remove_file(&staging) {
            Ok(()) => debug!(name = %staging, "removed stale staging link"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        self.root.symlink(&target, &staging)?;

        if let Err(err) = self.root.rename(&staging, ACTIVE_LINK) {
            if let Err(cleanup) = self.root.remove_file(&staging) {
                warn!(name = %staging, error = %cleanup, "could not remove staging link");
            }
            return Err(err.into());
        }

        info!(target = %target, "active pointer updated");
        Ok(())
    }
}
