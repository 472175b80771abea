// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote and credential configuration.
//!
//! # File Format
//!
//! ```ini
//! [Git repository]
//! url = https://example.com/your-repo-url.git
//!
//! [Git credentials]
//! username = your-username
//! api_token = an-api-token-or-password
//! ```
//!
//! # Validation
//!
//! ```text
//! INI --LiteralIni--> RawConfig (all Option)
//!        |
//!        v
//! section present?   no -> MissingSection
//! key present?       no -> MissingKey
//! url http(s)?       no -> InvalidValue
//! value non-empty?   no -> InvalidValue
//!        |
//!        v
//!    PushConfig --remote()--> RemoteUrl
//! ```

pub mod format;
pub mod loader;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, PushResult};
use crate::git::remote::RemoteUrl;

use loader::ConfigLoader;

/// Config file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".credentials";

/// Section holding the remote URL.
pub const REPOSITORY_SECTION: &str = "Git repository";

/// Section holding username and token.
pub const CREDENTIALS_SECTION: &str = "Git credentials";

/// Validated push configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConfig {
    /// `[Git repository]`
    pub repository: RepositorySection,
    /// `[Git credentials]`
    pub credentials: CredentialsSection,
}

/// `[Git repository]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySection {
    /// Remote URL without credentials; always `http` or `https`.
    pub url: Url,
}

/// `[Git credentials]` section.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialsSection {
    pub username: String,
    /// Access token or password.
    pub api_token: String,
}

impl fmt::Debug for CredentialsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsSection")
            .field("username", &self.username)
            .field("api_token", &"[hidden]")
            .finish()
    }
}

// Option names arrive lower-cased; section names as written, and in lower
// case when the config crate normalises table keys.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawConfig {
    #[serde(default, rename = "Git repository", alias = "git repository")]
    repository: Option<RawRepository>,
    #[serde(default, rename = "Git credentials", alias = "git credentials")]
    credentials: Option<RawCredentials>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRepository {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Default, Deserialize)]
struct RawCredentials {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    api_token: Option<String>,
}

impl fmt::Debug for RawCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCredentials")
            .field("username", &self.username)
            .field("api_token", &self.api_token.as_ref().map(|_| "[hidden]"))
            .finish()
    }
}

fn required(section: &str, key: &str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    })?;
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: "value must not be empty".to_string(),
        });
    }
    Ok(value.trim().to_string())
}

fn parse_remote_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        section: REPOSITORY_SECTION.to_string(),
        key: "url".to_string(),
        message,
    };

    let mut url =
        Url::parse(raw).map_err(|e| invalid(format!("'{raw}' is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(format!(
                "unsupported scheme '{scheme}', only http and https are supported"
            )));
        }
    }

    // credentials come from [Git credentials] only
    if url.set_username("").is_err() || url.set_password(None).is_err() {
        return Err(invalid("URL has no host".to_string()));
    }
    Ok(url)
}

impl PushConfig {
    /// Create a new configuration loader.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single INI file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing, malformed, or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PushResult<Self> {
        Self::builder().add_ini_file(path).build()
    }

    /// Load configuration from an INI string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the content is malformed or fails validation.
    pub fn parse(content: &str) -> PushResult<Self> {
        Self::builder().add_ini_str(content).build()
    }

    pub(crate) fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let repository = raw.repository.ok_or_else(|| ConfigError::MissingSection {
            section: REPOSITORY_SECTION.to_string(),
        })?;
        let credentials = raw.credentials.ok_or_else(|| ConfigError::MissingSection {
            section: CREDENTIALS_SECTION.to_string(),
        })?;

        let url = required(REPOSITORY_SECTION, "url", repository.url)?;
        let url = parse_remote_url(&url)?;
        let username = required(CREDENTIALS_SECTION, "username", credentials.username)?;
        let api_token = required(CREDENTIALS_SECTION, "api_token", credentials.api_token)?;

        Ok(Self {
            repository: RepositorySection { url },
            credentials: CredentialsSection {
                username,
                api_token,
            },
        })
    }

    /// Remote URL with username and token embedded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the URL cannot carry credentials.
    pub fn remote(&self) -> Result<RemoteUrl, ConfigError> {
        RemoteUrl::with_credentials(
            &self.repository.url,
            &self.credentials.username,
            &self.credentials.api_token,
        )
        .ok_or_else(|| ConfigError::InvalidValue {
            section: REPOSITORY_SECTION.to_string(),
            key: "url".to_string(),
            message: format!("'{}' cannot carry credentials", self.repository.url),
        })
    }

    /// Format configuration options for display, token hidden.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            format!("{REPOSITORY_SECTION}.url"),
            self.repository.url.to_string(),
        );
        options.insert(
            format!("{CREDENTIALS_SECTION}.username"),
            self.credentials.username.clone(),
        );
        options.insert(
            format!("{CREDENTIALS_SECTION}.api_token"),
            "[hidden]".to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
