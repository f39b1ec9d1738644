//! VersionControl port
//!
//! One capability with two modes of interaction: resolving a revision
//! against a throwaway copy, and materializing a commit into a directory.

use std::path::Path;

use crate::error::VcsError;

pub trait VersionControl {
    /// Resolve a branch, tag, short hash, or `HEAD` to a full commit hash.
    ///
    /// Must not leave anything behind on disk.
    fn resolve_revision(&self, revision: &str) -> Result<String, VcsError>;

    /// Clone into `destination` and check out `commit_hash`.
    ///
    /// Succeeds without doing anything when `destination` already holds a
    /// repository.
    fn fetch_and_checkout(&self, commit_hash: &str, destination: &Path) -> Result<(), VcsError>;
}
