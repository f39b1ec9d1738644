//! Local Deployment Root
//!
//! Implements the DeploymentRoot port for a real directory on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::{DeploymentRoot, RootEntry, BUILT_MARKER};

/// Working root backed by a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRoot {
    root: PathBuf,
}

impl LocalRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root at the process working directory
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DeploymentRoot for LocalRoot {
    fn entries(&self) -> io::Result<Vec<RootEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            // Names that are not UTF-8 can never be deployment identities.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            // DirEntry::file_type does not follow symlinks.
            let is_dir = entry.file_type()?.is_dir();
            entries.push(RootEntry { name, is_dir });
        }
        Ok(entries)
    }

    fn read_link(&self, name: &str) -> io::Result<Option<String>> {
        match fs::read_link(self.path_of(name)) {
            Ok(target) => Ok(Some(target.to_string_lossy().into_owned())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn symlink(&self, target: &str, link: &str) -> io::Result<()> {
        let link = self.path_of(link);

        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(target, link)
        }

        #[cfg(windows)]
        {
            std::os::windows::fs::symlink_dir(target, link)
        }
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        fs::rename(self.path_of(from), self.path_of(to))
    }

    fn remove_file(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.path_of(name))
    }

    fn remove_dir_all(&self, name: &str) -> io::Result<()> {
        fs::remove_dir_all(self.path_of(name))
    }

    fn is_built(&self, name: &str) -> io::Result<bool> {
        match fs::symlink_metadata(self.path_of(name).join(BUILT_MARKER)) {
            Ok(meta) => Ok(meta.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn mark_built(&self, name: &str) -> io::Result<()> {
        fs::write(self.path_of(name).join(BUILT_MARKER), b"")
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
