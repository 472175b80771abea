// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        PushError (16 bytes)
//!                |
//!       +--------+--------+
//!       v        v        v
//!    Config     Git    Process
//!      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config   NotFound, ParseError, MissingSection, MissingKey, InvalidValue
//!   Git      RepoNotFound, NotARepository, BranchNotFound, Gix,
//!            AuthenticationFailed, RemoteUnreachable, PushRejected
//!   Process  ExecutableNotFound, SpawnFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PushError`].
pub type PushResult<T> = std::result::Result<T, PushError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
/// Sub-errors are rendered inline and are not reported as `source()`.
#[derive(Debug, Error)]
pub enum PushError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(Box<ProcessError>),
}

impl PushError {
    /// Whether this error came from talking to the remote (network or auth).
    #[must_use]
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Git(git) if git.is_remote_failure())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PushError {
                fn from(err: $error) -> Self {
                    PushError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    GitError => Git,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Required section is absent.
    #[error("missing required config section '[{section}]'")]
    MissingSection { section: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(Box<gix::open::Error>),

    /// Failed to look up a reference.
    #[error("failed to find reference: {0}")]
    Reference(gix::reference::find::existing::Error),

    /// Failed to iterate references.
    #[error("failed to list references: {message}")]
    References { message: String },
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository path does not exist.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Path exists but is not a git repository.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Branch not found.
    #[error("branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(GixError),

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Remote rejected the supplied credentials.
    #[error("authentication failed for {url}: {message}")]
    AuthenticationFailed { url: String, message: String },

    /// Remote host could not be reached.
    #[error("remote unreachable: {url} - {message}")]
    RemoteUnreachable { url: String, message: String },

    /// Remote refused the update.
    #[error("push to {url} rejected: {message}")]
    PushRejected { url: String, message: String },
}

impl GitError {
    /// Whether this error came from talking to the remote (network or auth).
    #[must_use]
    pub const fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. }
                | Self::RemoteUnreachable { .. }
                | Self::PushRejected { .. }
        )
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {error}")]
    SpawnFailed {
        command: String,
        error: std::io::Error,
    },
}
