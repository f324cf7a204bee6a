//! Repository references and argument parsing

use super::workdir::WorkdirContext;
use crate::error::UsageError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A fully resolved `organization/owner/repository` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub organization: String,
    pub owner: String,
    pub repository: String,
}

impl RepoReference {
    /// Merge the argument's components over what the working directory implies.
    ///
    /// Components fill positions right to left: one component is the repository, two
    /// are owner and repository, three replace everything. The organization defaults to
    /// the working directory's, then to `default_organization`. Organization and owner
    /// must both end up non-empty.
    pub fn assemble(
        components: &[&str],
        context: &WorkdirContext,
        default_organization: &str,
    ) -> Result<Self, UsageError> {
        let mut organization =
            context.organization.clone().unwrap_or_else(|| default_organization.to_string());
        let mut owner = context.owner.clone().unwrap_or_default();
        let repository;

        match components {
            [org, own, repo] => {
                organization = org.to_string();
                owner = own.to_string();
                repository = repo.to_string();
            }
            [own, repo] => {
                owner = own.to_string();
                repository = repo.to_string();
            }
            [repo] => repository = repo.to_string(),
            _ => repository = String::new(),
        }

        if organization.is_empty() {
            return Err(UsageError::UnknownOrganization);
        }
        if owner.is_empty() {
            return Err(UsageError::UnknownOwner);
        }

        Ok(Self { organization, owner, repository })
    }

    /// SSH remote to clone from, e.g. `git@github.com:owner/repo.git`.
    pub fn origin(&self) -> String {
        format!("git@{}:{}/{}.git", self.organization, self.owner, self.repository)
    }

    pub fn owner_path(&self, source_root: &Path) -> PathBuf {
        join_segments(source_root, &[&self.organization, &self.owner])
    }

    pub fn target_path(&self, source_root: &Path) -> PathBuf {
        join_segments(source_root, &[&self.organization, &self.owner, &self.repository])
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.organization, self.owner, self.repository)
    }
}

/// Split a `[[org/]owner/]repo` argument on `/`, keeping empty components.
pub fn split_components(arg: &str) -> Result<Vec<&str>, UsageError> {
    let components: Vec<&str> = arg.split('/').collect();
    if components.len() > 3 {
        return Err(UsageError::TooManySlashes);
    }
    Ok(components)
}

/// Join `segments` under `root` and clean the result lexically: empty and `.` segments
/// vanish and `..` drops the previous component (never above the filesystem root).
fn join_segments(root: &Path, segments: &[&str]) -> PathBuf {
    let mut path = PathBuf::new();
    let parts = segments.iter().flat_map(|s| Path::new(s).components());
    for component in root.components().chain(parts) {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match path.components().next_back() {
                Some(Component::Normal(_)) => {
                    path.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => path.push(".."),
            },
            other => path.push(other),
        }
    }
    if path.as_os_str().is_empty() {
        path.push(".");
    }
    path
}
