// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copy task implementation.
//!
//! ```text
//! CopyTask
//! prefix/src/main/resources/ --> ${buildDir}/exportedResources/
//!   include = []            everything
//!   include = ["**/*.yml"]  matching paths (relative to from/)
//! ```
//!
//! A missing source directory is not an error: there is simply nothing to
//! export. Relative paths and file contents are preserved.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, RubResult, TaskError};
use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::info;
use wax::{Glob, Program};

use crate::config::paths::PathsConfig;
use crate::config::types::TaskSpec;
use crate::task::{TaskContext, Taskable};
use crate::utility::fs::copy::copy_dir_filtered_async;

/// Recursive directory copy task.
#[derive(Debug, Clone)]
pub struct CopyTask {
    name: String,
    enabled: bool,
    from: PathBuf,
    into: PathBuf,
    include: Vec<String>,
}

impl CopyTask {
    /// Create a copy task for already resolved paths.
    #[must_use]
    pub fn new(name: impl Into<String>, from: impl Into<PathBuf>, into: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            from: from.into(),
            into: into.into(),
            include: Vec::new(),
        }
    }

    /// Build the task from its `[tasks.<name>]` table.
    ///
    /// # Errors
    ///
    /// Returns an error if `from`/`into` use unknown variables or an
    /// `include` pattern is not a valid glob.
    pub fn from_spec(name: &str, spec: &TaskSpec, paths: &PathsConfig) -> RubResult<Self> {
        let task = Self::new(name, paths.expand(&spec.from)?, paths.expand(&spec.into)?)
            .with_include(spec.include.iter().cloned())?;
        Ok(Self {
            enabled: spec.enabled,
            ..task
        })
    }

    /// Restrict the copy to files matching any of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a pattern that is not a valid
    /// glob.
    pub fn with_include(mut self, patterns: impl IntoIterator<Item = String>) -> RubResult<Self> {
        for pattern in patterns {
            if let Err(e) = Glob::new(&pattern) {
                return Err(ConfigError::InvalidValue {
                    section: format!("tasks.{}", self.name),
                    key: "include".to_string(),
                    message: format!("invalid glob '{pattern}': {e}"),
                }
                .into());
            }
            self.include.push(pattern);
        }
        Ok(self)
    }

    /// Resolved source directory.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.from
    }

    /// Resolved destination directory.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.into
    }

    #[must_use]
    pub fn include(&self) -> &[String] {
        &self.include
    }

    /// Copy `from` into `into`.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` cannot be inspected for a reason other than
    /// not existing, exists but is not a directory, or if any file cannot be
    /// copied.
    pub async fn copy(&self, ctx: &TaskContext) -> Result<()> {
        let metadata = match tokio::fs::metadata(&self.from).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    task = %self.name,
                    from = %self.from.display(),
                    "Source directory missing, nothing to copy"
                );
                return Ok(());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Task '{}' cannot access {}", self.name, self.from.display())
                });
            }
        };

        if !metadata.is_dir() {
            return Err(TaskError::ExecutionFailed {
                name: self.name.clone(),
                message: format!("{} is not a directory", self.from.display()),
            }
            .into());
        }

        if ctx.is_dry_run() {
            info!(
                task = %self.name,
                from = %self.from.display(),
                into = %self.into.display(),
                "[dry-run] Would copy directory"
            );
            return Ok(());
        }

        let globs = self
            .include
            .iter()
            .map(|pattern| Glob::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("invalid include pattern in task '{}': {e}", self.name))?;
        let accept = |path: &Path| globs.is_empty() || globs.iter().any(|glob| glob.is_match(path));

        let copied = copy_dir_filtered_async(&self.from, &self.into, &accept)
            .await
            .with_context(|| format!("Task '{}' failed to copy files", self.name))?;

        info!(
            task = %self.name,
            files = copied,
            into = %self.into.display(),
            "Copied directory"
        );
        Ok(())
    }
}

impl Taskable for CopyTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, _ctx: &TaskContext) -> bool {
        self.enabled
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.copy(ctx))
    }
}

#[cfg(test)]
mod tests;
