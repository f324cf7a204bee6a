//! Error types for resolution

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Exit code for malformed or insufficient input.
pub const USAGE_EXIT_CODE: u8 = 129;
/// Exit code for filesystem or clone failures.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// The argument could not be turned into a complete repository reference.
///
/// Usage errors are always detected before anything on disk is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("git-src only accepts one argument")]
    TooManyArguments,

    #[error("malformed repository: too many /")]
    TooManySlashes,

    #[error("could not figure out organization")]
    UnknownOrganization,

    #[error("could not figure out owner")]
    UnknownOwner,
}

/// `git clone` did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("git exited with {0}")]
    Status(ExitStatus),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("could not create directory {} because: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not clone {origin}: {source}")]
    Clone {
        origin: String,
        #[source]
        source: CloneError,
    },
}

impl ResolveError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ResolveError::Usage(_) => USAGE_EXIT_CODE,
            ResolveError::CreateDirectory { .. } | ResolveError::Clone { .. } => FAILURE_EXIT_CODE,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, ResolveError::Usage(_))
    }
}
