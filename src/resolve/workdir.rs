//! Organization/owner inference from the working directory

use crate::config::Config;

/// What the working directory says about the reference being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdirContext {
    pub organization: Option<String>,
    pub owner: Option<String>,
}

impl WorkdirContext {
    /// Inspect `config.working_directory` relative to `config.source_root`.
    ///
    /// `<root>/github.com/me/repo/deep/inside` yields organization `github.com` and owner
    /// `me`. `<root>/github.com` yields only the organization: an owner is never guessed.
    /// Anything outside the root yields nothing.
    pub fn infer(config: &Config) -> Self {
        let Ok(remainder) = config.working_directory.strip_prefix(&config.source_root) else {
            return Self::default();
        };
        let remainder = remainder.to_string_lossy();
        let mut segments = remainder.trim_matches('/').splitn(3, '/');

        let organization = non_empty(segments.next());
        let owner = non_empty(segments.next());
        let context = Self { organization, owner };
        tracing::debug!(?context, "Inferred context from working directory");
        context
    }
}

fn non_empty(segment: Option<&str>) -> Option<String> {
    segment.filter(|s| !s.is_empty()).map(str::to_string)
}
