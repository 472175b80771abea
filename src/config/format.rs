// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! INI format that keeps values byte for byte.
//!
//! The `config` crate's built-in INI format unescapes `\` and strips quotes,
//! which corrupts tokens. This one reads values literally:
//!
//! ```text
//! [Git credentials]
//! USERNAME  = ci-bot        -> "Git credentials".username  = "ci-bot"
//! api_token = "ab\cd"       -> "Git credentials".api_token = "\"ab\\cd\""
//! ```
//!
//! Section names are kept as written; option names are lower-cased.
//! Options outside any section are ignored.

use std::error::Error;

use config::{FileStoredFormat, Format, Map, Value, ValueKind};
use ini::{Ini, ParseOption};

/// Literal INI for use with [`config::File::from_str`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralIni;

impl Format for LiteralIni {
    fn parse(
        &self,
        uri: Option<&String>,
        text: &str,
    ) -> Result<Map<String, Value>, Box<dyn Error + Send + Sync>> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options)?;

        let mut map: Map<String, Value> = Map::new();
        for (section, properties) in ini.iter() {
            let Some(section) = section else {
                continue;
            };
            let mut table: Map<String, Value> = Map::new();
            for (key, value) in properties.iter() {
                table.insert(
                    key.to_lowercase(),
                    Value::new(uri, ValueKind::String(value.to_string())),
                );
            }
            map.insert(section.to_string(), Value::new(uri, ValueKind::Table(table)));
        }
        Ok(map)
    }
}

impl FileStoredFormat for LiteralIni {
    fn file_extensions(&self) -> &'static [&'static str] {
        &["ini"]
    }
}
