// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()            defaults (Config::default)
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()           RUB_<SECTION>__<KEY>, filtered to known sections
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::PathBuf;

use config::Source;

use super::Config;
use crate::error::Result;

/// Name of the project-local configuration file.
pub const CONFIG_FILE: &str = "rub.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RUB";

/// Top-level sections an environment variable may address.
const ENV_SECTIONS: [&str; 4] = ["global", "paths", "project", "tasks"];

/// Serializes [`Config::default`] as the lowest-priority source.
#[derive(Debug, Clone)]
struct Defaults;

impl Source for Defaults {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        config::Config::try_from(&Config::default())?.collect()
    }
}

/// Environment values as dotted keys, already filtered and normalized.
#[derive(Debug, Clone)]
struct EnvLayer(config::Map<String, config::Value>);

impl Source for EnvLayer {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        Ok(self.0.clone())
    }
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<config::Map<String, String>>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder().add_source(Defaults),
            env_prefix: None,
            env_vars: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g.
    /// `RUB_GLOBAL__OUTPUT_LOG_LEVEL=4` or `RUB_TASKS__EXPORTRESOURCES__ENABLED=false`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads environment values from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies `key=value` overrides.
    ///
    /// Values are parsed as TOML scalars where possible (`true`, `3`),
    /// and kept as strings otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an override has no `=` or an empty key.
    pub fn set_all<'a>(self, overrides: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut loader = self;
        for entry in overrides {
            let (key, value) = entry
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| anyhow::anyhow!("invalid override '{entry}', expected key=value"))?;
            loader = loader.set(key, parse_override(value))?;
        }
        Ok(loader)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match self.env_layer()? {
            Some(layer) => self.builder.add_source(layer),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.resolve_and_validate()?;
        tracing::debug!(sources = self.files.len(), "Loaded configuration");
        Ok(config)
    }

    /// Collects the prefixed environment.
    ///
    /// Variables outside [`ENV_SECTIONS`] are skipped. Task names come back
    /// lowercased, so they are mapped onto a task already declared by a lower
    /// layer when one matches ignoring case.
    fn env_layer(&self) -> Result<Option<EnvLayer>> {
        let Some(prefix) = &self.env_prefix else {
            return Ok(None);
        };

        let raw = config::Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(self.env_vars.clone())
            .collect()?;
        if raw.is_empty() {
            return Ok(None);
        }

        let task_names: Vec<String> = self
            .builder
            .build_cloned()?
            .get_table("tasks")
            .map(|tasks| tasks.keys().cloned().collect())
            .unwrap_or_default();

        let mut values = config::Map::new();
        for (key, value) in raw {
            let key = key.to_lowercase();
            let mut parts = key.splitn(3, '.');
            let section = parts.next().unwrap_or_default();
            if !ENV_SECTIONS.contains(&section) {
                tracing::debug!(key = %key, "Ignoring environment variable outside known sections");
                continue;
            }

            let key = match (section, parts.next(), parts.next()) {
                ("tasks", Some(task), Some(field)) => {
                    let task = task_names
                        .iter()
                        .find(|name| name.eq_ignore_ascii_case(task))
                        .map_or(task, String::as_str);
                    format!("tasks.{task}.{field}")
                }
                _ => key.clone(),
            };
            values.insert(key, value);
        }

        Ok(Some(EnvLayer(values)))
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_override(value: &str) -> config::Value {
    if let Ok(flag) = value.parse::<bool>() {
        flag.into()
    } else if let Ok(number) = value.parse::<i64>() {
        number.into()
    } else {
        value.into()
    }
}
