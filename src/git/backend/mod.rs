// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (local, read)      --> GixBackend (pure Rust gix)
//! GitTransport (remote, push) --> ShellBackend (git CLI)
//! ```

use std::path::Path;
use std::process::{Command, Output};

use tracing::{debug, trace};

use super::remote::RemoteUrl;
use crate::error::{GitError, GixError, ProcessError, PushResult};

// --- Query Trait (Read-only operations) ---

/// Read-only queries against a local repository.
pub trait GitQuery {
    /// Check if path is a git repository.
    fn is_git_repo(path: &Path) -> bool;

    /// Check whether `refs/heads/<branch>` exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or the
    /// reference lookup fails for reasons other than absence.
    fn has_local_branch(repo_path: &Path, branch: &str) -> PushResult<bool>;

    /// Short names of all local branches, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or references
    /// cannot be listed.
    fn local_branches(repo_path: &Path) -> PushResult<Vec<String>>;

    /// Short names of all remote-tracking branches, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or references
    /// cannot be listed.
    fn remote_branches(repo_path: &Path) -> PushResult<Vec<String>>;
}

// --- Transport Trait (Remote operations) ---

/// Operations that talk to a remote.
///
/// gix has no push support, so these go through the git CLI.
pub trait GitTransport {
    /// Push `refs/heads/<branch>` to the same ref on `remote`.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed`, `RemoteUnreachable` or `PushRejected`
    /// when the remote refuses, `BranchNotFound` when git cannot resolve the
    /// branch, or a `ProcessError` if git cannot be started.
    fn push(repo_path: &Path, remote: &RemoteUrl, branch: &str) -> PushResult<()>;

    /// Advertised refs of `remote`, as printed by `git ls-remote`.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`GitTransport::push`].
    fn ls_remote(repo_path: &Path, remote: &RemoteUrl) -> PushResult<String>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only; never spawns a subprocess.
pub struct GixBackend;

impl GixBackend {
    fn open(path: &Path) -> PushResult<gix::Repository> {
        let repo = gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))))?;
        Ok(repo)
    }
}

fn references_error(e: impl std::fmt::Display) -> GitError {
    GitError::Gix(GixError::References {
        message: e.to_string(),
    })
}

fn collect_short_names<'r, I, E>(references: I) -> PushResult<Vec<String>>
where
    I: Iterator<Item = Result<gix::Reference<'r>, E>>,
    E: std::fmt::Display,
{
    let mut names = Vec::new();
    for reference in references {
        let reference = reference.map_err(references_error)?;
        names.push(reference.name().shorten().to_string());
    }
    names.sort();
    Ok(names)
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::open(path).is_ok()
    }

    fn has_local_branch(repo_path: &Path, branch: &str) -> PushResult<bool> {
        let repo = Self::open(repo_path)?;
        let full_name = format!("refs/heads/{branch}");

        match repo.find_reference(full_name.as_str()) {
            Ok(_) => Ok(true),
            Err(gix::reference::find::existing::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(GitError::Gix(GixError::Reference(e)).into()),
        }
    }

    fn local_branches(repo_path: &Path) -> PushResult<Vec<String>> {
        let repo = Self::open(repo_path)?;
        let platform = repo.references().map_err(references_error)?;
        collect_short_names(platform.local_branches().map_err(references_error)?)
    }

    fn remote_branches(repo_path: &Path) -> PushResult<Vec<String>> {
        let repo = Self::open(repo_path)?;
        let platform = repo.references().map_err(references_error)?;
        collect_short_names(platform.remote_branches().map_err(references_error)?)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
pub struct ShellBackend;

impl ShellBackend {
    /// Spawn git and collect its output. Sets `GCM_INTERACTIVE=never` and
    /// `GIT_TERMINAL_PROMPT=0` so a bad token fails instead of prompting.
    ///
    /// The error names only the subcommand; `args` may contain credentials.
    pub(crate) fn git_output(args: &[&str], cwd: &Path) -> PushResult<Output> {
        let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;

        let output = Command::new(git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|error| ProcessError::SpawnFailed {
                command: format!("git {}", args.first().copied().unwrap_or_default()),
                error,
            })?;
        Ok(output)
    }

    /// Run a git command against `remote`, redacting credentials from all output.
    fn remote_command(
        subcommand: &str,
        args: &[&str],
        repo_path: &Path,
        remote: &RemoteUrl,
        branch: Option<&str>,
    ) -> PushResult<String> {
        let mut full_args = vec![subcommand, remote.expose()];
        full_args.extend_from_slice(args);

        debug!(%remote, ?args, "running git {subcommand}");
        let output = Self::git_output(&full_args, repo_path)?;

        let stdout = remote.redact(String::from_utf8_lossy(&output.stdout).trim());
        let stderr = remote.redact(String::from_utf8_lossy(&output.stderr).trim());
        trace!(%stdout, %stderr, "git {subcommand} finished");

        if output.status.success() {
            return Ok(stdout);
        }
        Err(classify_remote_failure(subcommand, remote, branch, &stderr).into())
    }
}

/// Map git's stderr from a failed remote operation onto an error kind.
///
/// Matching is on the stable English messages git and common hosts emit.
#[must_use]
pub fn classify_remote_failure(
    subcommand: &str,
    remote: &RemoteUrl,
    branch: Option<&str>,
    stderr: &str,
) -> GitError {
    const AUTH: &[&str] = &[
        "authentication failed",
        "could not read username",
        "could not read password",
        "invalid username or password",
        "error: 401",
        "error: 403",
        "permission denied",
    ];
    const UNREACHABLE: &[&str] = &[
        "could not resolve host",
        "failed to connect",
        "connection refused",
        "connection timed out",
        "unable to access",
        "could not read from remote repository",
        "does not appear to be a git repository",
    ];
    const REJECTED: &[&str] = &["[rejected]", "[remote rejected]", "failed to push some refs"];

    let lower = stderr.to_lowercase();
    let url = remote.redacted().to_string();
    let message = stderr.to_string();

    if let Some(branch) = branch
        && lower.contains("src refspec")
        && lower.contains("does not match any")
    {
        return GitError::BranchNotFound {
            branch: branch.to_string(),
        };
    }
    if AUTH.iter().any(|needle| lower.contains(needle)) {
        return GitError::AuthenticationFailed { url, message };
    }
    if UNREACHABLE.iter().any(|needle| lower.contains(needle)) {
        return GitError::RemoteUnreachable { url, message };
    }
    if REJECTED.iter().any(|needle| lower.contains(needle)) {
        return GitError::PushRejected { url, message };
    }
    GitError::CommandFailed {
        command: format!("git {subcommand} {url}"),
        message,
    }
}

impl GitTransport for ShellBackend {
    fn push(repo_path: &Path, remote: &RemoteUrl, branch: &str) -> PushResult<()> {
        let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");
        Self::remote_command("push", &[&refspec], repo_path, remote, Some(branch))?;
        Ok(())
    }

    fn ls_remote(repo_path: &Path, remote: &RemoteUrl) -> PushResult<String> {
        Self::remote_command("ls-remote", &[], repo_path, remote, None)
    }
}
