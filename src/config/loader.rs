// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_ini_file(path)   (must exist)
//!   .add_ini_str(text)
//!        |
//!        v
//!    build() --LiteralIni--> RawConfig --> PushConfig (validated)
//! ```
//!
//! Later sources override earlier ones key by key.

use std::fs;
use std::path::{Path, PathBuf};

use config::File;
use tracing::debug;

use super::format::LiteralIni;
use super::{PushConfig, RawConfig};
use crate::error::{ConfigError, PushResult};

enum Source {
    File(PathBuf),
    Str(String),
}

/// Builder for loading configuration from INI sources.
pub struct ConfigLoader {
    sources: Vec<Source>,
    missing: Option<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
            missing: None,
        }
    }

    /// Adds an INI configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't
    /// exist, `build()` returns `ConfigError::NotFound`.
    #[must_use]
    pub fn add_ini_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        if !p.is_file() {
            self.missing.get_or_insert_with(|| p.to_path_buf());
            return self;
        }
        self.sources.push(Source::File(p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_ini_str(mut self, content: &str) -> Self {
        self.sources.push(Source::Str(content.to_string()));
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - A configuration file is missing or unreadable.
    /// - A source is not valid INI.
    /// - A required section or key is absent, or a value is invalid.
    pub fn build(self) -> PushResult<PushConfig> {
        if let Some(path) = &self.missing {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let sources = self.describe_sources();
        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: sources.clone(),
            message: e.to_string(),
        };

        let mut builder = config::Config::builder();
        for source in &self.sources {
            let text = match source {
                Source::File(path) => {
                    fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?
                }
                Source::Str(text) => text.clone(),
            };
            builder = builder.add_source(File::from_str(&text, LiteralIni));
        }

        let raw: RawConfig = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(parse_error)?;
        debug!(?raw, sources = %sources, "parsed configuration");

        Ok(PushConfig::from_raw(raw)?)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.sources
            .iter()
            .map(|source| match source {
                Source::File(path) => ("file".to_string(), path.clone()),
                Source::Str(_) => ("string".to_string(), PathBuf::from("<string>")),
            })
            .collect()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.loaded_files()
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }

    fn describe_sources(&self) -> String {
        self.loaded_files()
            .iter()
            .map(|(_, path)| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
