//! DeploymentRoot port - the working root that holds every deployment
//!
//! All paths are single names relative to the root. The store, the
//! activation controller, and the orchestrator never touch the process
//! working directory directly; they go through this trait so tests can
//! substitute an in-memory root.

use std::io;
use std::path::PathBuf;

/// File written inside a deployment once every build command succeeded
pub const BUILT_MARKER: &str = ".mfd-built";

/// One top-level entry of the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    pub name: String,
    /// True for real directories; symlinks are not followed
    pub is_dir: bool,
}

impl RootEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Abstract working root
///
/// Implementations:
/// - `LocalRoot` - a real directory on disk
/// - `MemoryRoot` - in-memory fake for tests
pub trait DeploymentRoot {
    /// List top-level entries in scan order
    fn entries(&self) -> io::Result<Vec<RootEntry>>;

    /// Target of the symlink `name`, or `None` when nothing exists there
    fn read_link(&self, name: &str) -> io::Result<Option<String>>;

    /// Create a symlink `link` pointing at the relative name `target`
    fn symlink(&self, target: &str, link: &str) -> io::Result<()>;

    /// Atomically rename `from` to `to`, replacing any non-directory at `to`
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Remove a file or symlink
    fn remove_file(&self, name: &str) -> io::Result<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, name: &str) -> io::Result<()>;

    /// Whether deployment `name` finished building
    fn is_built(&self, name: &str) -> io::Result<bool>;

    /// Record that deployment `name` finished building
    fn mark_built(&self, name: &str) -> io::Result<()>;

    /// Location of `name` for external collaborators (VCS, build commands)
    fn path_of(&self, name: &str) -> PathBuf;
}
