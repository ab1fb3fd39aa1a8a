// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   typed layers (RubResult)                 commands, main (anyhow::Result)
//!   config::paths  ─┐
//!   task building  ─┼──> RubError ──?──────> anyhow::Error + .with_context(..)
//!   project layout ─┘      |
//!               +----------+----------+
//!               v          v          v
//!             Config      Task      Project
//!              Box         Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingKey, InvalidValue
//!   Task    NotFound, ExecutionFailed, Interrupted, Event
//!   Project UnknownModule, UnknownCatalog, UnknownLibrary, VersionRef, ...
//!
//! All variants boxed => RubError is two words.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RubError`].
pub type RubResult<T> = std::result::Result<T, RubError>;

/// Error of the typed layers: path expansion, task construction and project
/// resolution.
///
/// Displays as the wrapped error. Sub-errors are boxed to keep this enum small.
#[derive(Debug, Error)]
pub enum RubError {
    /// Configuration error.
    #[error(transparent)]
    Config(Box<ConfigError>),

    /// Task error.
    #[error(transparent)]
    Task(Box<TaskError>),

    /// Project descriptor error.
    #[error(transparent)]
    Project(Box<ProjectError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RubError {
                fn from(err: $error) -> Self {
                    RubError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    TaskError => Task,
    ProjectError => Project,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Task Errors ---

/// Task execution errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task was not found.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// Task execution failed.
    #[error("task '{name}' failed: {message}")]
    ExecutionFailed { name: String, message: String },

    /// Task was interrupted.
    #[error("task '{0}' was interrupted")]
    Interrupted(String),

    /// A task event handler failed.
    #[error("task '{name}' event failed: {source}")]
    Event {
        name: String,
        #[source]
        source: rub_api::error::EventError,
    },
}

// --- Project Errors ---

/// Project descriptor errors.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Dependency references a module that is not included.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// Module directory does not exist.
    #[error("module '{module}' directory not found: {path}")]
    ModuleDirMissing { module: String, path: String },

    /// Dependency references a catalog that is not declared.
    #[error("unknown catalog '{0}'")]
    UnknownCatalog(String),

    /// Catalog has no library with this alias.
    #[error("catalog '{catalog}' has no library '{alias}'")]
    UnknownLibrary { catalog: String, alias: String },

    /// Library refers to a version that is not declared.
    #[error("library '{alias}' refers to unknown version '{version}'")]
    VersionRef { alias: String, version: String },

    /// Catalog entry is malformed.
    #[error("invalid catalog entry '{alias}': {message}")]
    InvalidLibrary { alias: String, message: String },

    /// Dependency declares neither a project nor a catalog reference.
    #[error("dependency '{0}' must set exactly one of 'project' or 'catalog'")]
    InvalidDependency(String),

    /// Catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file could not be parsed.
    #[error("failed to parse catalog '{path}': {message}")]
    CatalogParse { path: String, message: String },
}
