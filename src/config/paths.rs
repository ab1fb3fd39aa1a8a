// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! prefix/          project root (default ".")
//!   build/         build output root, ${buildDir}
//! ```
//!
//! `build` is resolved from `prefix` if not set or relative.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, RubResult};

/// Placeholder for the build output root in task paths.
pub const BUILD_DIR_VAR: &str = "${buildDir}";

/// Placeholder for the project root in task paths.
pub const PROJECT_DIR_VAR: &str = "${projectDir}";

/// Project and build output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (all other paths relative to this).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PathBuf>,
    /// Build output root (default: prefix/build).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            prefix: Some(PathBuf::from(".")),
            build: None,
        }
    }
}

impl PathsConfig {
    /// Resolve relative paths against prefix and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `prefix` path is not set.
    pub fn resolve(&mut self) -> RubResult<()> {
        let prefix = self.prefix()?.to_path_buf();

        match &self.build {
            Some(build) if build.is_relative() => self.build = Some(prefix.join(build)),
            None => self.build = Some(prefix.join("build")),
            _ => {}
        }

        Ok(())
    }

    /// Get the prefix path, returning an error if not set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `prefix` path is not set.
    pub fn prefix(&self) -> RubResult<&Path> {
        self.prefix.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "prefix".to_string(),
            }
            .into()
        })
    }

    /// Build output root, `prefix/build` if not resolved yet.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if neither `build` nor `prefix`
    /// is set.
    pub fn build_dir(&self) -> RubResult<PathBuf> {
        match &self.build {
            Some(build) => Ok(build.clone()),
            None => Ok(self.prefix()?.join("build")),
        }
    }

    /// Expands `${buildDir}` / `${projectDir}` in a task path and resolves
    /// the result against the prefix.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for unknown `${...}` variables,
    /// or `MissingKey` if the prefix is not set.
    pub fn expand(&self, raw: &str) -> RubResult<PathBuf> {
        let prefix = self.prefix()?;
        let build = self.build_dir()?;

        let expanded = raw
            .replace(BUILD_DIR_VAR, &build.to_string_lossy())
            .replace(PROJECT_DIR_VAR, &prefix.to_string_lossy());

        if let Some(start) = expanded.find("${") {
            let var = expanded[start..]
                .split_once('}')
                .map_or(&expanded[start..], |(var, _)| var);
            return Err(ConfigError::InvalidValue {
                section: "tasks".to_string(),
                key: raw.to_string(),
                message: format!("unknown variable '{var}}}'"),
            }
            .into());
        }

        let path = PathBuf::from(expanded);
        Ok(if path.is_relative() {
            prefix.join(path)
        } else {
            path
        })
    }
}
