// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for rub.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (Config::default)
//! 2. rub.toml (cwd, optional)
//! 3. --config
//! 4. RUB_* env vars
//! 5. CLI overrides (--set, --root, --dry)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RUB_GLOBAL__DRY=true                    → global.dry = true
//! RUB_GLOBAL__OUTPUT_LOG_LEVEL=4          → global.output_log_level = 4
//! RUB_PATHS__PREFIX=/path                 → paths.prefix = "/path"
//! RUB_TASKS__EXPORTRESOURCES__ENABLED=false → tasks.exportResources.enabled = false
//! RUB_HOME=/x                             → ignored (not a config section)
//! ```
//!
//! # Tasks
//!
//! ```toml
//! [tasks.exportResources]
//! kind = "copy"
//! from = "src/main/resources"
//! into = "${buildDir}/exportedResources"
//! include = ["**/*.yml"]   # optional
//! ```
//!
//! Tables merge with the defaults, so a file that only sets
//! `tasks.exportResources.include` keeps the default `from`/`into`.

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::project::ProjectConfig;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, TaskKind, TaskSpec};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Project descriptor.
    pub project: ProjectConfig,
    /// Declared tasks by name.
    pub tasks: BTreeMap<String, TaskSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            paths: PathsConfig::default(),
            project: ProjectConfig::default(),
            tasks: types::default_tasks(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rub_common::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("rub.toml")
    ///     .with_env_prefix("RUB")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Looks up a task by name.
    ///
    /// Exact matches win; otherwise names compare ignoring ASCII case, since
    /// environment sources lowercase their keys.
    #[must_use]
    pub fn task_spec(&self, name: &str) -> Option<(&str, &TaskSpec)> {
        self.tasks
            .get_key_value(name)
            .or_else(|| {
                self.tasks
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
            })
            .map(|(key, spec)| (key.as_str(), spec))
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails, a task lacks a required
    /// field, or a dependency declaration is malformed.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;

        for (name, spec) in &self.tasks {
            match spec.kind {
                TaskKind::Copy => {
                    for (key, value) in [("from", &spec.from), ("into", &spec.into)] {
                        if value.trim().is_empty() {
                            return Err(ConfigError::MissingKey {
                                section: format!("tasks.{name}"),
                                key: key.to_string(),
                            }
                            .into());
                        }
                    }
                }
            }
        }

        for (name, spec) in &self.project.dependencies {
            spec.validate(name)?;
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns one `key = value` line per option, aligned on `=`.
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_project_options(&mut options);
        self.format_task_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        options.insert("paths.prefix".into(), fmt(self.paths.prefix.as_deref()));
        options.insert("paths.build".into(), fmt(self.paths.build.as_deref()));
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        let project = &self.project;
        options.insert("project.name".into(), project.name.clone());
        options.insert(
            "project.repositories".into(),
            project.repositories.join(", "),
        );
        for (id, dir) in &project.modules {
            options.insert(format!("project.modules.{id}"), dir.display().to_string());
        }
        for (name, file) in &project.catalogs {
            options.insert(format!("project.catalogs.{name}"), file.display().to_string());
        }
        for (name, spec) in &project.dependencies {
            let target = spec
                .project
                .as_deref()
                .or(spec.catalog.as_deref())
                .unwrap_or_default();
            options.insert(
                format!("project.dependencies.{name}"),
                format!("{target} ({})", spec.scope),
            );
        }
    }

    fn format_task_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, spec) in &self.tasks {
            options.insert(format!("tasks.{name}.kind"), spec.kind.to_string());
            options.insert(format!("tasks.{name}.enabled"), spec.enabled.to_string());
            options.insert(format!("tasks.{name}.from"), spec.from.clone());
            options.insert(format!("tasks.{name}.into"), spec.into.clone());
            if !spec.include.is_empty() {
                options.insert(format!("tasks.{name}.include"), spec.include.join(", "));
            }
        }
    }
}
