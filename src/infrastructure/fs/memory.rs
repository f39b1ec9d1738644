//! In-memory Deployment Root
//!
//! A fake working root for tests. Uses `Arc<Mutex<>>` internally so it can
//! be cloned and shared with fakes that materialize directories.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{DeploymentRoot, RootEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir { built: bool },
    File,
    Link(String),
}

#[derive(Debug, Default)]
struct State {
    /// Insertion order doubles as scan order
    nodes: Vec<(String, Node)>,
    /// Names whose removal fails with PermissionDenied
    locked: Vec<String>,
}

impl State {
    fn find(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|(n, _)| n == name)
    }

    fn insert(&mut self, name: &str, node: Node) -> io::Result<()> {
        if self.find(name).is_some() {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, name.to_string()));
        }
        self.nodes.push((name.to_string(), node));
        Ok(())
    }

    fn check_unlocked(&self, name: &str) -> io::Result<()> {
        if self.locked.iter().any(|n| n == name) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, name.to_string()));
        }
        Ok(())
    }
}

fn not_found(name: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, name.to_string())
}

/// Working root held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    state: Arc<Mutex<State>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means another test thread panicked mid-update.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_dir(&self, name: &str) -> io::Result<()> {
        self.state().insert(name, Node::Dir { built: false })
    }

    /// Directory that already carries the build marker
    pub fn add_built_dir(&self, name: &str) -> io::Result<()> {
        self.state().insert(name, Node::Dir { built: true })
    }

    pub fn add_file(&self, name: &str) -> io::Result<()> {
        self.state().insert(name, Node::File)
    }

    pub fn add_link(&self, target: &str, link: &str) -> io::Result<()> {
        self.state().insert(link, Node::Link(target.to_string()))
    }

    /// Make every later removal of `name` fail
    pub fn lock(&self, name: &str) {
        self.state().locked.push(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.state().find(name).is_some()
    }

    /// All entry names in scan order
    pub fn names(&self) -> Vec<String> {
        self.state().nodes.iter().map(|(n, _)| n.clone()).collect()
    }
}

impl DeploymentRoot for MemoryRoot {
    fn entries(&self) -> io::Result<Vec<RootEntry>> {
        Ok(self
            .state()
            .nodes
            .iter()
            .map(|(name, node)| RootEntry {
                name: name.clone(),
                is_dir: matches!(node, Node::Dir { .. }),
            })
            .collect())
    }

    fn read_link(&self, name: &str) -> io::Result<Option<String>> {
        let state = self.state();
        match state.find(name).map(|i| &state.nodes[i].1) {
            None => Ok(None),
            Some(Node::Link(target)) => Ok(Some(target.clone())),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a symlink", name),
            )),
        }
    }

    fn symlink(&self, target: &str, link: &str) -> io::Result<()> {
        self.add_link(target, link)
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        let mut state = self.state();
        let src = state.find(from).ok_or_else(|| not_found(from))?;

        if let Some(dst) = state.find(to) {
            if matches!(state.nodes[dst].1, Node::Dir { .. }) {
                return Err(io::Error::other(format!("{} is a directory", to)));
            }
            // Replace in place so the destination keeps its scan position.
            let node = state.nodes[src].1.clone();
            state.nodes[dst].1 = node;
            state.nodes.remove(src);
        } else {
            state.nodes[src].0 = to.to_string();
        }
        Ok(())
    }

    fn remove_file(&self, name: &str) -> io::Result<()> {
        let mut state = self.state();
        let index = state.find(name).ok_or_else(|| not_found(name))?;
        state.check_unlocked(name)?;
        if matches!(state.nodes[index].1, Node::Dir { .. }) {
            return Err(io::Error::other(format!("{} is a directory", name)));
        }
        state.nodes.remove(index);
        Ok(())
    }

    fn remove_dir_all(&self, name: &str) -> io::Result<()> {
        let mut state = self.state();
        state.check_unlocked(name)?;
        let index = state.find(name).ok_or_else(|| not_found(name))?;
        if !matches!(state.nodes[index].1, Node::Dir { .. }) {
            return Err(io::Error::other(format!("{} is not a directory", name)));
        }
        state.nodes.remove(index);
        Ok(())
    }

    fn is_built(&self, name: &str) -> io::Result<bool> {
        let state = self.state();
        Ok(matches!(
            state.find(name).map(|i| &state.nodes[i].1),
            Some(Node::Dir { built: true })
        ))
    }

    fn mark_built(&self, name: &str) -> io::Result<()> {
        let mut state = self.state();
        let index = state.find(name).ok_or_else(|| not_found(name))?;
        match &mut state.nodes[index].1 {
            Node::Dir { built } => {
                *built = true;
                Ok(())
            }
            _ => Err(io::Error::other(format!("{} is not a directory", name))),
        }
    }

    fn path_of(&self, name: &str) -> PathBuf {
        PathBuf::from("/memory").join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let root = MemoryRoot::new();
        let other = root.clone();
        other.add_dir("d").unwrap();
        assert!(root.contains("d"));
    }

    #[test]
    fn rename_over_link_replaces_target() {
        let root = MemoryRoot::new();
        root.add_link("old", "active").unwrap();
        root.add_link("new", ".tmp").unwrap();

        root.rename(".tmp", "active").unwrap();

        assert_eq!(root.read_link("active").unwrap().as_deref(), Some("new"));
        assert_eq!(root.names(), vec!["active"]);
    }

    #[test]
    fn rename_over_directory_fails() {
        let root = MemoryRoot::new();
        root.add_dir("active").unwrap();
        root.add_link("new", ".tmp").unwrap();
        assert!(root.rename(".tmp", "active").is_err());
    }

    #[test]
    fn build_marker_tracks_directories_only() {
        let root = MemoryRoot::new();
        root.add_dir("d").unwrap();
        root.add_file("f").unwrap();

        assert!(!root.is_built("d").unwrap());
        root.mark_built("d").unwrap();
        assert!(root.is_built("d").unwrap());

        assert!(!root.is_built("missing").unwrap());
        assert!(root.mark_built("f").is_err());
    }

    #[test]
    fn locked_entries_cannot_be_removed() {
        let root = MemoryRoot::new();
        root.add_dir("d").unwrap();
        root.lock("d");
        let err = root.remove_dir_all("d").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(root.contains("d"));
    }
}
