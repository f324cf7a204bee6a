//! `git` subprocess backend

use super::GitOps;
use crate::error::CloneError;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Talks to the local filesystem and the `git` executable on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self { program: "git".to_string() }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl GitOps for GitCli {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as present.
        match std::fs::symlink_metadata(path) {
            Ok(_) => true,
            Err(err) => !is_absent(err.kind()),
        }
    }

    fn create(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn clone_repository(&self, origin: &str, target: &Path) -> Result<(), CloneError> {
        tracing::debug!(
            program = %self.program,
            origin,
            target = %target.display(),
            "Running git clone"
        );

        // Both streams share our stderr so git's output keeps its order and stdout
        // stays reserved for the resolved path.
        let status = Command::new(&self.program)
            .arg("clone")
            .arg("--recursive")
            .arg(origin)
            .arg(target)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CloneError::Spawn { program: self.program.clone(), source })?;

        if !status.success() {
            return Err(CloneError::Status(status));
        }
        Ok(())
    }
}

/// Lookup failures that mean nothing can be at the path. Anything else, such as a
/// permission error, leaves the path treated as present so it is never cloned over.
fn is_absent(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}
