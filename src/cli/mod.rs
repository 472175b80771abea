// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! ```text
//! push REPO BRANCH [--config CONFIG] [--debug] [-h]
//! ```


use crate::config::DEFAULT_CONFIG_FILE;
use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Push a Git branch to the remote named in a credentials file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "push",
    author,
    version,
    about = "Push a Git branch using stored credentials",
    after_help = "CONFIGURATION:\n\n\
                  The configuration file is an INI file of the form\n\n\
                  \x20   [Git repository]\n\
                  \x20   url = https://example.com/your-repo-url.git\n\n\
                  \x20   [Git credentials]\n\
                  \x20   username = your-username\n\
                  \x20   api_token = an-api-token-or-password\n\n\
                  Only http and https remotes are supported."
)]
pub struct Cli {
    /// Path to local repository.
    #[arg(value_name = "REPO")]
    pub repository: PathBuf,

    /// Branch to push.
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Configuration file.
    #[arg(long, value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable debugging output.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Console log level implied by `--debug`.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        LogLevel::from_debug_flag(self.debug)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
