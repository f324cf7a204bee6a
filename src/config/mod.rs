//! Configuration loading
//!
//! Everything is read from the environment on each invocation; nothing is persisted or
//! cached between runs.

pub mod env;
pub mod loader;

use std::path::PathBuf;

pub use env::{Environment, MapEnvironment, OsEnvironment};
pub use loader::load_config;

/// Overrides the source root (default: `<home>/src`).
pub const SRC_ROOT_VAR: &str = "GIT_SRC_ROOT";
/// Overrides the default organization (default: [`DEFAULT_ORGANIZATION`]).
pub const DEFAULT_ORG_VAR: &str = "GIT_SRC_DEFAULT_ORG";
/// Working directory used to infer organization and owner.
pub const WORKING_DIRECTORY_VAR: &str = "PWD";

pub const DEFAULT_ORGANIZATION: &str = "github.com";

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory under which repositories live as `<org>/<owner>/<repo>`.
    pub source_root: PathBuf,
    /// Organization used when neither the argument nor the working directory names one.
    pub default_organization: String,
    /// Caller's working directory; empty when unknown, which disables inference.
    pub working_directory: PathBuf,
}
