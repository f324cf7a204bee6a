//! In-memory backend for tests

use super::GitOps;
use crate::error::CloneError;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// Records every call and keeps a set of "present" paths.
///
/// A successful clone adds its target to the set, so a second resolution of the same
/// reference sees the checkout and does not clone again.
#[derive(Debug, Default)]
pub struct InMemoryGit {
    present: RefCell<BTreeSet<PathBuf>>,
    created: RefCell<Vec<PathBuf>>,
    clones: RefCell<Vec<(String, PathBuf)>>,
    fail_create: bool,
    fail_clone: bool,
}

impl InMemoryGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as already present.
    pub fn with_existing(self, path: impl Into<PathBuf>) -> Self {
        self.present.borrow_mut().insert(path.into());
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_clone(mut self) -> Self {
        self.fail_clone = true;
        self
    }

    /// `(origin, target)` of each clone attempt, in order.
    pub fn clones(&self) -> Vec<(String, PathBuf)> {
        self.clones.borrow().clone()
    }

    pub fn created(&self) -> Vec<PathBuf> {
        self.created.borrow().clone()
    }

    /// No directory was created and no clone was attempted.
    pub fn untouched(&self) -> bool {
        self.created.borrow().is_empty() && self.clones.borrow().is_empty()
    }
}

impl GitOps for InMemoryGit {
    fn exists(&self, path: &Path) -> bool {
        self.present.borrow().contains(path)
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        self.created.borrow_mut().push(path.to_path_buf());
        if self.fail_create {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        self.present.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn clone_repository(&self, origin: &str, target: &Path) -> Result<(), CloneError> {
        self.clones.borrow_mut().push((origin.to_string(), target.to_path_buf()));
        if self.fail_clone {
            return Err(CloneError::Spawn {
                program: "git".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "git not found"),
            });
        }
        self.present.borrow_mut().insert(target.to_path_buf());
        Ok(())
    }
}
