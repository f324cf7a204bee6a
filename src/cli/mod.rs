//! Command-line interface for git-src
//!
//! Prints the resolved path on stdout and nothing else, so it can be used as
//! `cd "$(git-src owner/repo)"`. Diagnostics and logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::OsEnvironment;
use crate::error::{ResolveError, USAGE_EXIT_CODE};
use crate::fetch::GitCli;
use crate::resolve::resolve;

const USAGE: &str = "usage: git src [repo]

When [repo] is omitted, git-src returns $GIT_SRC_ROOT.

[repo] is in the format [[org/]owner/]repository.

For example: github.com/pelletier/git-src.

[org] and [owner] can be omitted when the current working directory is set
appropriately. For example:

PWD=$GIT_SRC_ROOT/github.com/pelletier git-src  => github.com/pelletier/git-src
PWD=$GIT_SRC_ROOT/github.com/ pelletier/git-src => github.com/pelletier/git-src";

/// Resolve a repository shorthand to its checkout under $GIT_SRC_ROOT, cloning it if needed
#[derive(Parser)]
#[command(name = "git-src")]
#[command(author, version, about, long_about = None)]
#[command(after_help = USAGE)]
pub struct Cli {
    /// Repository as [[org/]owner/]repository; omit to print the source root
    #[arg(value_name = "REPO")]
    repo: Vec<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            err.print().context("Failed writing command-line error")?;
            return Ok(ExitCode::from(code));
        }
    };

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    match resolve(&OsEnvironment, &GitCli::new(), &cli.repo) {
        Ok(path) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(path.as_os_str().as_encoded_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed writing resolved path")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report(&err);
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn report(err: &ResolveError) {
    if err.is_usage() {
        eprintln!("fatal: {err}");
        eprintln!();
        eprintln!("{USAGE}");
    } else {
        eprintln!("{err}");
    }
}
