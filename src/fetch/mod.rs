//! Repository fetching
//!
//! The resolver only needs three things from the outside world: whether a path exists,
//! creating a directory, and cloning into a target. [`GitCli`] does this for real;
//! [`InMemoryGit`] records calls without touching the disk.

use crate::error::CloneError;
use std::io;
use std::path::Path;

pub mod git;
pub mod memory;

pub use git::GitCli;
pub use memory::InMemoryGit;

pub trait GitOps {
    /// `true` if anything is present at `path`. Never fails on a missing path.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and its parents. Succeeds if it already exists.
    fn create(&self, path: &Path) -> io::Result<()>;

    /// Recursively clone `origin` (including submodules) into `target`.
    fn clone_repository(&self, origin: &str, target: &Path) -> Result<(), CloneError>;
}
