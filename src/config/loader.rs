//! Config resolution from the environment

use super::{
    Config, Environment, DEFAULT_ORGANIZATION, DEFAULT_ORG_VAR, SRC_ROOT_VAR,
    WORKING_DIRECTORY_VAR,
};
use std::path::PathBuf;

/// Build the effective [`Config`] for this invocation.
///
/// Never fails. When the home directory cannot be determined the default source root
/// degrades to the relative path `src`; this is logged but not treated as an error.
pub fn load_config<E: Environment + ?Sized>(env: &E) -> Config {
    let source_root = env.path_var(SRC_ROOT_VAR).unwrap_or_else(default_source_root);
    let default_organization = env.var_or(DEFAULT_ORG_VAR, DEFAULT_ORGANIZATION);
    let working_directory = env.path_var(WORKING_DIRECTORY_VAR).unwrap_or_default();

    tracing::debug!(
        source_root = %source_root.display(),
        default_organization = %default_organization,
        working_directory = %working_directory.display(),
        "Loaded configuration"
    );

    Config { source_root, default_organization, working_directory }
}

fn default_source_root() -> PathBuf {
    let home = user_home_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory; set {SRC_ROOT_VAR} explicitly");
        PathBuf::new()
    });
    home.join("src")
}

/// Home directory from the current user's account record. `$HOME` is not consulted.
#[cfg(unix)]
fn user_home_dir() -> Option<PathBuf> {
    use nix::unistd::{getuid, User};

    match User::from_uid(getuid()) {
        Ok(user) => user.map(|u| u.dir),
        Err(err) => {
            tracing::debug!(%err, "User database lookup failed");
            None
        }
    }
}

#[cfg(not(unix))]
fn user_home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
