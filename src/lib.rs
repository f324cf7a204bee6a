//! git-src: resolve repository shorthands to local checkouts
//!
//! Maps `[[organization/]owner/]repository` onto
//! `$GIT_SRC_ROOT/<organization>/<owner>/<repository>`, inferring missing parts from the
//! working directory and cloning the repository when it is not present yet.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod resolve;

pub use config::{load_config, Config, Environment, MapEnvironment, OsEnvironment};
pub use error::{CloneError, ResolveError, UsageError};
pub use fetch::{GitCli, GitOps, InMemoryGit};
pub use resolve::{resolve, RepoReference};
