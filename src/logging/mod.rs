// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!        |
//!        v
//!    stderr fmt layer
//!    EnvFilter(level)
//!
//! --debug => DEBUG (this crate only), otherwise INFO
//! ANSI colours only when stderr is a terminal
//! ```

use std::io::IsTerminal;

use bon::Builder;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Console log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);

    /// Level selected by the `--debug` flag.
    #[must_use]
    pub const fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::DEBUG } else { Self::INFO }
    }

    /// Convert to `EnvFilter` directive string.
    ///
    /// At DEBUG only this crate is raised; gix and friends stay at `warn`.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        if self.0 >= Self::DEBUG.0 {
            "warn,git_pusher=debug,push=debug"
        } else {
            "info"
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_show_timestamps), default = false)]
    show_timestamps: bool,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Get the console log level.
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    /// Check if timestamps should be shown in console output.
    #[must_use]
    pub const fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    /// Check if target (module path) should be shown in output.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Initialize the logging system with the given configuration.
///
/// Output goes to stderr so that stdout stays free for command output.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Example
///
/// ```no_run
/// use git_pusher::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::DEBUG)
///     .build();
///
/// init_logging(&config).expect("Failed to initialize logging");
/// tracing::debug!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let console_filter = EnvFilter::new(config.console_level().to_filter_string());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal());

    // fmt layers with and without timestamps have different types
    let console_layer = if config.show_timestamps() {
        console_layer.with_filter(console_filter).boxed()
    } else {
        console_layer
            .without_time()
            .with_filter(console_filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    Ok(())
}
