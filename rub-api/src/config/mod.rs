// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Format-agnostic configuration files.
//!
//! # Reader Pipeline
//!
//! ```text
//! path --> ConfigFormat::from_path --> reader()
//!                                         |
//!            json | yml/yaml | toml       v
//!                                  load() --> ConfigData
//!                                  save() <-- ConfigData
//!
//! ConfigData --> item::load::<T>()   typed view (serde)
//! file + key --> SettingProvider     cached lookups
//! ```
//!
//! Every format is normalized to [`ConfigData`], a JSON-like map with string
//! keys. Documents whose top level is not a map load as an empty map.

pub mod item;
pub mod providers;
pub mod setting;

use std::path::Path;

use serde_json::Value;

use crate::error::ConfigError;
use providers::{JsonReader, TomlReader, YamlReader};

/// Format-independent configuration document.
pub type ConfigData = serde_json::Map<String, Value>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Maps a file extension (without the dot) to a format, ignoring case.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detects the format of a file from the text after the last `.` of its name.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&extension_of(path))
    }

    /// Canonical extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yml",
            Self::Toml => "toml",
        }
    }

    /// Returns the shared reader for this format.
    #[must_use]
    pub fn reader(self) -> &'static dyn ConfigReader {
        match self {
            Self::Json => &JsonReader,
            Self::Yaml => &YamlReader,
            Self::Toml => &TomlReader,
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Lowercased text after the last `.` of the file name, or an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Reader and writer for one configuration file format.
pub trait ConfigReader: Send + Sync {
    /// The format handled by this reader.
    fn format(&self) -> ConfigFormat;

    /// Parses document text. Errors carry the parser's message.
    ///
    /// # Errors
    ///
    /// Returns the parser message if the content is not valid for the format.
    fn parse(&self, content: &str) -> Result<ConfigData, String>;

    /// Renders a document to text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the data cannot be represented in
    /// this format.
    fn render(&self, data: &ConfigData) -> Result<String, ConfigError>;

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if its content is invalid.
    fn load(&self, path: &Path) -> Result<ConfigData, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let data = self.parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            format: self.format(),
            message,
        })?;
        tracing::debug!(path = %path.display(), format = %self.format(), keys = data.len(), "Loaded config file");
        Ok(data)
    }

    /// Saves a configuration file, replacing its content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the data cannot be rendered and
    /// `ConfigError::Write` if the file cannot be written.
    fn save(&self, path: &Path, data: &ConfigData) -> Result<(), ConfigError> {
        let content = self.render(data)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), format = %self.format(), "Saved config file");
        Ok(())
    }
}

/// Keeps map documents and replaces anything else with an empty map.
pub(crate) fn into_data(value: Value) -> ConfigData {
    match value {
        Value::Object(map) => map,
        _ => ConfigData::new(),
    }
}

#[cfg(test)]
mod tests;
