//! Lifecycle Use Case
//!
//! The orchestrator behind every subcommand. Each call re-reads the working
//! root; no state survives between calls.
//!
//! Deploy state machine:
//! 1. List deployments and look for the commit
//! 2. Finished deployment found: activate and restart, nothing else
//! 3. Otherwise fetch, build, mark built, activate, restart, clean
//!
//! A deployment whose build never finished is reused by the next deploy of
//! the same commit: fetch is a no-op on the existing checkout and the build
//! restarts from its first command.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::application::activation::ActivationController;
use crate::application::store::{DeploymentStore, ListedDeployment, ACTIVE_LINK};
use crate::domain::ports::{
    DeploymentRoot, LifecycleEvent, LifecycleEventSink, NoopEventSink, ProcessRunner,
    ServiceManager, VersionControl,
};
use crate::domain::services::{find_by_commit_hash, position_of, Verdict};
use crate::domain::value_objects::Deployment;
use crate::error::{MfdError, MfdResult};

use super::options::LifecycleSettings;
use super::result::{CleanReport, DeployOutcome, DeployReport};

/// Lifecycle orchestrator, parameterized by its ports
pub struct Lifecycle<R, V, P, S>
where
    R: DeploymentRoot,
    V: VersionControl,
    P: ProcessRunner,
    S: ServiceManager,
{
    root: R,
    vcs: V,
    runner: P,
    services: S,
    settings: LifecycleSettings,
    events: Arc<dyn LifecycleEventSink>,
}

impl<R, V, P, S> Lifecycle<R, V, P, S>
where
    R: DeploymentRoot,
    V: VersionControl,
    P: ProcessRunner,
    S: ServiceManager,
{
    pub fn new(root: R, vcs: V, runner: P, services: S, settings: LifecycleSettings) -> Self {
        Self {
            root,
            vcs,
            runner,
            services,
            settings,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events` instead of discarding it
    pub fn with_events(mut self, events: Arc<dyn LifecycleEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn settings(&self) -> &LifecycleSettings {
        &self.settings
    }

    fn store(&self) -> DeploymentStore<'_, R> {
        DeploymentStore::new(&self.root)
    }

    fn emit(&self, event: LifecycleEvent) {
        self.events.on_event(event);
    }

    /// Full commit hash for a branch, tag, short hash or `HEAD`
    pub fn resolve(&self, revision: &str) -> MfdResult<String> {
        let commit = self.vcs.resolve_revision(revision)?;
        debug!(revision, commit = %commit, "resolved revision");
        self.emit(LifecycleEvent::Resolved {
            revision: revision.to_string(),
            commit: commit.clone(),
        });
        Ok(commit)
    }

    /// Deploy `commit_hash`, stamping a fresh deployment with the current time
    pub fn deploy(&self, commit_hash: &str) -> MfdResult<DeployReport> {
        self.deploy_at(commit_hash, Utc::now())
    }

    /// Deploy `commit_hash`, stamping a fresh deployment with `now`
    pub fn deploy_at(&self, commit_hash: &str, now: DateTime<Utc>) -> MfdResult<DeployReport> {
        let deployments = self.store().list()?;
        let existing = find_by_commit_hash(&deployments, commit_hash).cloned();

        let deployment = match existing {
            Some(dep) if self.root.is_built(&dep.name())? => {
                debug!(deployment = %dep, "cache hit");
                self.emit(LifecycleEvent::CacheHit {
                    deployment: dep.clone(),
                });
                self.switch_to(&dep)?;
                self.restart()?;
                return Ok(DeployReport {
                    deployment: dep,
                    outcome: DeployOutcome::CacheHit,
                    clean: None,
                });
            }
            Some(dep) => {
                debug!(deployment = %dep, "resuming unfinished deployment");
                dep
            }
            None => Deployment::new(now, commit_hash),
        };

        self.fetch(&deployment)?;
        self.build(&deployment)?;
        self.root.mark_built(&deployment.name())?;
        self.switch_to(&deployment)?;
        self.restart()?;
        let clean = self.clean()?;

        Ok(DeployReport {
            deployment,
            outcome: DeployOutcome::Built,
            clean: Some(clean),
        })
    }

    fn fetch(&self, deployment: &Deployment) -> MfdResult<()> {
        self.emit(LifecycleEvent::Fetching {
            deployment: deployment.clone(),
        });
        let destination = self.root.path_of(&deployment.name());
        self.vcs
            .fetch_and_checkout(deployment.commit_hash(), &destination)?;
        info!(deployment = %deployment, "checked out");
        Ok(())
    }

    fn build(&self, deployment: &Deployment) -> MfdResult<()> {
        let plan = &self.settings.plan;
        let total = plan.len();
        let working_dir = self.root.path_of(&deployment.name());

        plan.run(&self.runner, &working_dir, |index, command| {
            self.emit(LifecycleEvent::BuildStep {
                index,
                total,
                command: command.clone(),
            });
        })?;

        info!(deployment = %deployment, steps = total, "build finished");
        Ok(())
    }

    fn switch_to(&self, deployment: &Deployment) -> MfdResult<()> {
        self.emit(LifecycleEvent::Activating {
            deployment: deployment.clone(),
        });
        ActivationController::new(&self.root).activate(deployment)
    }

    /// Restart the configured unit; a no-op when none is configured
    pub fn restart(&self) -> MfdResult<()> {
        match &self.settings.unit {
            Some(unit) => {
                self.emit(LifecycleEvent::Restarting { unit: unit.clone() });
                self.services.restart(unit)
            }
            None => {
                debug!("no systemd unit configured, skipping restart");
                Ok(())
            }
        }
    }

    /// Point `active` at the deployment just older than the current one.
    ///
    /// Never restarts the service; callers that want a restart ask for it.
    pub fn rollback(&self) -> MfdResult<Deployment> {
        let store = self.store();
        let active = store.active_deployment()?;
        let ordered = store.list()?;

        let index = position_of(&ordered, &active).ok_or_else(|| MfdError::DeploymentNotFound {
            what: active.name(),
        })?;
        let previous = ordered
            .get(index + 1)
            .cloned()
            .ok_or(MfdError::NoPreviousDeployment)?;

        self.emit(LifecycleEvent::RollingBack {
            deployment: previous.clone(),
        });
        self.switch_to(&previous)?;
        Ok(previous)
    }

    /// Delete deployments past the retention window, never the active one.
    ///
    /// Stops at the first failed deletion; earlier deletions stay done.
    pub fn clean(&self) -> MfdResult<CleanReport> {
        let store = self.store();
        let active = store.active()?;
        let ordered = store.list()?;

        let mut report = CleanReport::default();
        for (deployment, verdict) in self.settings.retention.sweep(&ordered, active.as_ref()) {
            match verdict {
                Verdict::PreserveActive => {
                    debug!(deployment = %deployment, "keeping active deployment past retention window");
                    self.emit(LifecycleEvent::SkippedActive {
                        deployment: deployment.clone(),
                    });
                    report.preserved_active = Some(deployment.clone());
                }
                Verdict::Remove => {
                    self.emit(LifecycleEvent::Removing {
                        deployment: deployment.clone(),
                    });
                    self.root.remove_dir_all(&deployment.name())?;
                    info!(deployment = %deployment, "removed");
                    report.removed.push(deployment.clone());
                }
            }
        }
        Ok(report)
    }

    /// Deployments newest first, with the active one marked
    pub fn list(&self) -> MfdResult<Vec<ListedDeployment>> {
        self.store().annotated()
    }

    /// Find a listed deployment by canonical name or full commit hash
    pub fn select(&self, selector: &str) -> MfdResult<Deployment> {
        let deployments = self.store().list()?;
        match Deployment::parse(selector) {
            Ok(wanted) => deployments
                .into_iter()
                .find(|dep| *dep == wanted)
                .ok_or_else(|| MfdError::DeploymentNotFound {
                    what: selector.to_string(),
                }),
            Err(_) => DeploymentStore::<R>::find_by_commit_hash(&deployments, selector),
        }
    }

    /// Point `active` at an existing deployment
    pub fn activate(&self, selector: &str) -> MfdResult<Deployment> {
        let deployment = self.select(selector)?;
        self.switch_to(&deployment)?;
        Ok(deployment)
    }

    /// Delete one deployment; the active one is refused
    pub fn remove(&self, selector: &str) -> MfdResult<Deployment> {
        if selector == ACTIVE_LINK {
            return Err(MfdError::CannotRemoveActive {
                name: selector.to_string(),
            });
        }

        let deployment = self.select(selector)?;
        if self.store().active()?.as_ref() == Some(&deployment) {
            return Err(MfdError::CannotRemoveActive {
                name: deployment.name(),
            });
        }

        self.emit(LifecycleEvent::Removing {
            deployment: deployment.clone(),
        });
        self.root.remove_dir_all(&deployment.name())?;
        info!(deployment = %deployment, "removed");
        Ok(deployment)
    }
}
