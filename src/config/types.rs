// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ProjectConfig, tasks
//! tasks:  task name --> TaskSpec { kind, enabled, from, into, include }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem operations without making changes.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Kind of a configured task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Recursive directory copy.
    #[default]
    Copy,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
        }
    }
}

/// A task declared under `[tasks.<name>]`.
///
/// `from` and `into` are relative to the project root (`paths.prefix`) and
/// may use `${buildDir}` and `${projectDir}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskSpec {
    pub kind: TaskKind,
    pub enabled: bool,
    pub from: String,
    pub into: String,
    /// Glob filters relative to `from`; everything is copied when empty.
    pub include: Vec<String>,
}

impl Default for TaskSpec {
    fn default() -> Self {
        Self {
            kind: TaskKind::Copy,
            enabled: true,
            from: String::new(),
            into: String::new(),
            include: Vec::new(),
        }
    }
}

impl TaskSpec {
    /// Copy task from `from` into `into`.
    #[must_use]
    pub fn copy(from: &str, into: &str) -> Self {
        Self {
            from: from.to_string(),
            into: into.to_string(),
            ..Self::default()
        }
    }
}

/// Name of the resource export task.
pub const EXPORT_RESOURCES: &str = "exportResources";

/// Tasks declared when the configuration declares none.
#[must_use]
pub fn default_tasks() -> BTreeMap<String, TaskSpec> {
    BTreeMap::from([(
        EXPORT_RESOURCES.to_string(),
        TaskSpec::copy("src/main/resources", "${buildDir}/exportedResources"),
    )])
}
