//! git-src: jump to (and clone if needed) a repository under your source root
//!
//! Prints the local path for a repository shorthand such as `owner/repo` so a shell
//! function can `cd "$(git-src owner/repo)"`.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    git_src::cli::run()
}
