//! ProcessRunner port - runs one external command to completion

use std::path::Path;

/// How a finished process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// Non-zero exit; `code` is `None` when killed by a signal
    Failure { code: Option<i32> },
}

/// Abstract process execution
///
/// Implementations stream the child's output live and block until it exits.
/// An `Err` means the process could not be started at all.
pub trait ProcessRunner {
    fn run(&self, argv: &[String], working_dir: &Path) -> std::io::Result<ExitOutcome>;
}
