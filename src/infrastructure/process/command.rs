//! Command Runner
//!
//! Implements the ProcessRunner port with `std::process::Command`.
//! Child output is streamed live to the terminal.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{ExitOutcome, ProcessRunner};

/// Process runner that inherits the parent's standard streams
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    stdout_to_stderr: bool,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send child stdout to our stderr, keeping stdout free for NDJSON
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }
}

impl ProcessRunner for CommandRunner {
    fn run(&self, argv: &[String], working_dir: &Path) -> io::Result<ExitOutcome> {
        let Some((program, args)) = argv.split_first() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command"));
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        debug!(program = %program, dir = %working_dir.display(), "spawning");
        let status = cmd.status()?;

        Ok(if status.success() {
            ExitOutcome::Success
        } else {
            ExitOutcome::Failure {
                code: status.code(),
            }
        })
    }
}
