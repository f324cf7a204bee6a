//! Resolution of repository shorthands to local paths
//!
//! Validation happens entirely up front: nothing on disk is created unless the argument
//! resolved to a complete reference.

use crate::config::{load_config, Config, Environment};
use crate::error::{ResolveError, UsageError};
use crate::fetch::GitOps;
use std::path::PathBuf;

pub mod reference;
pub mod workdir;

pub use reference::{split_components, RepoReference};
pub use workdir::WorkdirContext;

/// Resolve the command-line arguments to a local path, cloning when needed.
///
/// - no argument: the source root, with no filesystem access at all
/// - one argument: `[[org/]owner/]repo`, completed from the working directory
/// - anything else: [`UsageError::TooManyArguments`], before any configuration is read
pub fn resolve<E, G, S>(env: &E, git: &G, args: &[S]) -> Result<PathBuf, ResolveError>
where
    E: Environment + ?Sized,
    G: GitOps + ?Sized,
    S: AsRef<str>,
{
    let arg: &str = match args {
        [] => return Ok(load_config(env).source_root),
        [arg] => arg.as_ref(),
        _ => return Err(UsageError::TooManyArguments.into()),
    };

    let config = load_config(env);
    let reference = resolve_reference(&config, arg)?;
    ensure_checkout(&config, git, &reference)
}

/// Turn one argument into a complete reference. Pure: touches neither disk nor network.
pub fn resolve_reference(config: &Config, arg: &str) -> Result<RepoReference, UsageError> {
    let components = split_components(arg)?;
    let context = WorkdirContext::infer(config);
    let reference =
        RepoReference::assemble(&components, &context, &config.default_organization)?;
    tracing::debug!(%reference, "Resolved reference");
    Ok(reference)
}

/// Return the checkout path for `reference`, cloning it first if it is absent.
pub fn ensure_checkout<G: GitOps + ?Sized>(
    config: &Config,
    git: &G,
    reference: &RepoReference,
) -> Result<PathBuf, ResolveError> {
    let target = reference.target_path(&config.source_root);
    if git.exists(&target) {
        tracing::debug!(target = %target.display(), "Checkout already present");
        return Ok(target);
    }

    let origin = reference.origin();
    eprintln!("repository not found. cloning from {origin}");

    let owner_path = reference.owner_path(&config.source_root);
    git.create(&owner_path)
        .map_err(|source| ResolveError::CreateDirectory { path: owner_path.clone(), source })?;
    git.clone_repository(&origin, &target)
        .map_err(|source| ResolveError::Clone { origin: origin.clone(), source })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapEnvironment, SRC_ROOT_VAR, WORKING_DIRECTORY_VAR};
    use crate::fetch::InMemoryGit;
    use std::path::Path;

    const DEEP_WD: &str = "/home/me/src/github.com/pelletier/other-repo/in/the/weeds";

    fn blah_env() -> MapEnvironment {
        MapEnvironment::from_pairs([(SRC_ROOT_VAR, "/blah")])
    }

    fn home_env(wd: &str) -> MapEnvironment {
        MapEnvironment::from_pairs([(SRC_ROOT_VAR, "/home/me/src"), (WORKING_DIRECTORY_VAR, wd)])
    }

    fn resolved(env: &MapEnvironment, arg: &str) -> PathBuf {
        resolve(env, &InMemoryGit::new(), &[arg]).expect("should resolve")
    }

    fn exit_code(env: &MapEnvironment, args: &[&str]) -> u8 {
        resolve(env, &InMemoryGit::new(), args).expect_err("should fail").exit_code()
    }

    #[test]
    fn no_argument_returns_root_without_touching_disk() {
        let git = InMemoryGit::new();
        let path = resolve(&blah_env(), &git, &[] as &[&str]).expect("root");
        assert_eq!(path, PathBuf::from("/blah"));
        assert!(git.untouched());
    }

    #[test]
    fn too_many_arguments() {
        let git = InMemoryGit::new();
        let err = resolve(&blah_env(), &git, &["a", "b"]).expect_err("usage");
        assert!(matches!(err, ResolveError::Usage(UsageError::TooManyArguments)));
        assert_eq!(err.exit_code(), 129);
        assert!(git.untouched());
    }

    #[test]
    fn full_reference_is_cloned() {
        let git = InMemoryGit::new();
        let path = resolve(&blah_env(), &git, &["github.com/pelletier/go-src"]).expect("path");

        assert_eq!(path, PathBuf::from("/blah/github.com/pelletier/go-src"));
        assert_eq!(git.created(), vec![PathBuf::from("/blah/github.com/pelletier")]);
        assert_eq!(
            git.clones(),
            vec![(
                "git@github.com:pelletier/go-src.git".to_string(),
                PathBuf::from("/blah/github.com/pelletier/go-src")
            )]
        );
    }

    #[test]
    fn existing_checkout_is_not_cloned_again() {
        let git = InMemoryGit::new();
        let first = resolve(&blah_env(), &git, &["github.com/pelletier/go-src"]).expect("first");
        let second = resolve(&blah_env(), &git, &["github.com/pelletier/go-src"]).expect("second");

        assert_eq!(first, second);
        assert_eq!(git.clones().len(), 1);
    }

    #[test]
    fn existing_target_skips_create_and_clone() {
        let git = InMemoryGit::new().with_existing("/blah/github.com/pelletier/go-src");
        resolve(&blah_env(), &git, &["github.com/pelletier/go-src"]).expect("path");
        assert!(git.untouched());
    }

    #[test]
    fn extra_slashes_are_rejected() {
        assert_eq!(exit_code(&blah_env(), &["github.com/pelletier/go-src/whatever"]), 129);
    }

    #[test]
    fn partial_references_inside_root() {
        let env = home_env(DEEP_WD);
        assert_eq!(resolved(&env, "go-src"), Path::new("/home/me/src/github.com/pelletier/go-src"));
        assert_eq!(
            resolved(&env, "pelletier/go-src"),
            Path::new("/home/me/src/github.com/pelletier/go-src")
        );
        assert_eq!(resolved(&env, "other/repo"), Path::new("/home/me/src/github.com/other/repo"));
        assert_eq!(
            resolved(&env, "mycorp.com/something/else"),
            Path::new("/home/me/src/mycorp.com/something/else")
        );
    }

    #[test]
    fn outside_root_uses_default_organization() {
        let env = home_env("/home/me/somewhere/else");
        assert_eq!(
            resolved(&env, "something/else"),
            Path::new("/home/me/src/github.com/something/else")
        );
        assert_eq!(
            resolved(&env, "mycorp.com/something/else"),
            Path::new("/home/me/src/mycorp.com/something/else")
        );
        assert_eq!(exit_code(&env, &["lonely"]), 129);
    }

    #[test]
    fn default_organization_is_configurable() {
        let mut env = home_env("/elsewhere");
        env.set(crate::config::DEFAULT_ORG_VAR, "gitlab.com");
        assert_eq!(resolved(&env, "me/repo"), Path::new("/home/me/src/gitlab.com/me/repo"));
    }

    #[test]
    fn bare_slashes_are_rejected_everywhere() {
        for wd in ["/home/me/somewhere/else", DEEP_WD] {
            let env = home_env(wd);
            for arg in ["/", "//"] {
                let git = InMemoryGit::new();
                let err = resolve(&env, &git, &[arg]).expect_err("usage");
                assert_eq!(err.exit_code(), 129, "arg {arg:?} in {wd}");
                assert!(git.untouched());
            }
        }
    }

    #[test]
    fn organization_only_working_directory_does_not_guess_owner() {
        let env = home_env("/home/me/src/onlyorg");
        let err = resolve(&env, &InMemoryGit::new(), &["repo"]).expect_err("owner missing");
        assert!(matches!(err, ResolveError::Usage(UsageError::UnknownOwner)));
        assert_eq!(resolved(&env, "me/repo"), Path::new("/home/me/src/onlyorg/me/repo"));
    }

    #[test]
    fn create_failure_is_operational() {
        let git = InMemoryGit::new().failing_create();
        let err = resolve(&blah_env(), &git, &["github.com/me/repo"]).expect_err("create fails");
        assert!(matches!(err, ResolveError::CreateDirectory { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(git.clones().is_empty());
    }

    #[test]
    fn clone_failure_is_operational() {
        let git = InMemoryGit::new().failing_clone();
        let err = resolve(&blah_env(), &git, &["github.com/me/repo"]).expect_err("clone fails");
        match &err {
            ResolveError::Clone { origin, .. } => assert_eq!(origin, "git@github.com:me/repo.git"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.exit_code(), 1);
        // The owner directory is left in place.
        assert_eq!(git.created(), vec![PathBuf::from("/blah/github.com/me")]);
    }
}
