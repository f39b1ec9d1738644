//! Build plan
//!
//! An ordered list of build commands executed inside one deployment
//! directory. The first command that fails aborts the plan; later commands
//! never run.

use std::path::Path;

use crate::domain::ports::{ExitOutcome, ProcessRunner};
use crate::domain::value_objects::BuildCommand;
use crate::error::BuildError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<BuildCommand>,
}

impl BuildPlan {
    pub fn new(steps: Vec<BuildCommand>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, always from the first.
    ///
    /// `on_step` is called with the zero-based index before each step starts.
    pub fn run<R, F>(&self, runner: &R, working_dir: &Path, mut on_step: F) -> Result<(), BuildError>
    where
        R: ProcessRunner + ?Sized,
        F: FnMut(usize, &BuildCommand),
    {
        for (index, step) in self.steps.iter().enumerate() {
            on_step(index, step);

            let outcome = runner
                .run(step.argv(), working_dir)
                .map_err(|source| BuildError::Spawn {
                    command: step.to_string(),
                    source,
                })?;

            if let ExitOutcome::Failure { code } = outcome {
                return Err(BuildError::Failed {
                    command: step.to_string(),
                    code,
                });
            }
        }

        Ok(())
    }
}
