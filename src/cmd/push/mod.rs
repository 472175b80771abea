// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The push command.
//!
//! ```text
//! validate REPO (exists, is a repository)
//!        |
//!        v
//! load CONFIG --> RemoteUrl (credentials embedded)
//!        |
//!        v
//! validate BRANCH (refs/heads/BRANCH exists)
//!        |
//!        v
//! [--debug] local/remote branches, ls-remote
//!        |
//!        v
//! push refs/heads/BRANCH:refs/heads/BRANCH
//! ```
//!
//! Nothing touches the network before config and branch are validated.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::config::PushConfig;
use crate::config::loader::ConfigLoader;
use crate::error::{GitError, PushResult, Result};
use crate::git::backend::{GitQuery, GitTransport, GixBackend, ShellBackend};
use crate::git::remote::RemoteUrl;

/// Main handler: push with the gix query backend and the git CLI transport.
///
/// # Errors
///
/// Returns an error if validation, config loading, or the push fails.
pub fn run_push_command(cli: &Cli) -> Result<()> {
    run_push::<GixBackend, ShellBackend>(cli)
}

/// Push `cli.branch` of `cli.repository` to the configured remote.
///
/// # Errors
///
/// - `GitError::RepoNotFound` / `NotARepository` for a bad `REPO`.
/// - `ConfigError` for a missing or invalid config file.
/// - `GitError::BranchNotFound` for an unknown `BRANCH`.
/// - Remote failures (`AuthenticationFailed`, `RemoteUnreachable`,
///   `PushRejected`) from the transport.
pub fn run_push<Q: GitQuery, T: GitTransport>(cli: &Cli) -> Result<()> {
    debug!(?cli, "CLI args");

    validate_repository::<Q>(&cli.repository)?;

    let config = load_config(&cli.config)?;
    let remote = config
        .remote()
        .with_context(|| format!("invalid configuration in {}", cli.config.display()))?;

    validate_branch::<Q>(&cli.repository, &cli.branch)?;

    if cli.debug {
        log_diagnostics::<Q, T>(&cli.repository, &remote);
    }

    info!(branch = %cli.branch, %remote, "pushing");
    if let Err(e) = T::push(&cli.repository, &remote, &cli.branch) {
        if e.is_remote_failure() {
            warn!(
                config = %cli.config.display(),
                "remote refused or unreachable; check the url and credentials"
            );
        }
        return Err(anyhow::Error::from(e)
            .context(format!("failed to push branch '{}' to {remote}", cli.branch)));
    }
    info!(branch = %cli.branch, %remote, "pushed");

    Ok(())
}

fn validate_repository<Q: GitQuery>(path: &Path) -> PushResult<()> {
    if !path.exists() {
        return Err(GitError::RepoNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    if !Q::is_git_repo(path) {
        return Err(GitError::NotARepository {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<PushConfig> {
    let loader = ConfigLoader::new().add_ini_file(path);
    for line in loader.format_loaded_files() {
        debug!("config source {line}");
    }

    let config = loader
        .build()
        .with_context(|| format!("given configuration was invalid: {}", path.display()))?;
    for line in config.format_options() {
        debug!("{line}");
    }
    Ok(config)
}

fn validate_branch<Q: GitQuery>(repo_path: &Path, branch: &str) -> PushResult<()> {
    if branch.is_empty() || !Q::has_local_branch(repo_path, branch)? {
        return Err(GitError::BranchNotFound {
            branch: branch.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Local/remote branch listing and the remote's advertised refs.
///
/// Failures are logged and never change the outcome of the push.
fn log_diagnostics<Q: GitQuery, T: GitTransport>(repo_path: &Path, remote: &RemoteUrl) {
    match Q::local_branches(repo_path) {
        Ok(branches) => debug!(?branches, "local branches"),
        Err(e) => warn!("failed to list local branches: {e}"),
    }
    match Q::remote_branches(repo_path) {
        Ok(branches) => debug!(?branches, "remote branches"),
        Err(e) => warn!("failed to list remote branches: {e}"),
    }
    match T::ls_remote(repo_path, remote) {
        Ok(refs) => debug!(%remote, "ls-remote:\n{refs}"),
        Err(e) => warn!(%remote, "ls-remote failed: {e}"),
    }
}
