// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types of the API module.
//!
//! ```text
//!          ApiError (16 bytes)
//!                |
//!      +---------+---------+
//!      v         v         v
//!   Config     Event      Id
//!    Box        Box       Box
//!
//! Sub-errors:
//!   Config  Read, Parse, Write, Serialize, UnsupportedFormat, Mapping
//!   Event   Registration, NotMonitorable, HandlerFailed
//!   Id      InvalidNamespaced, InvalidNumber, InvalidUuid
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigFormat;
use crate::event::HandlerPriority;

/// Result type using [`ApiError`].
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error of the API module.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Event dispatch or registration error.
    #[error("event error: {0}")]
    Event(#[from] Box<EventError>),

    /// Identifier error.
    #[error("id error: {0}")]
    Id(#[from] Box<IdError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ApiError {
                fn from(err: $error) -> Self {
                    ApiError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EventError => Event,
    IdError => Id,
}

// --- Config Errors ---

/// Errors raised while reading, writing or mapping configuration data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid for its format.
    #[error("failed to parse {format} file '{}': {message}", path.display())]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    /// The file could not be written.
    #[error("failed to write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data cannot be represented in the target format.
    #[error("failed to serialize {format} data: {message}")]
    Serialize {
        format: ConfigFormat,
        message: String,
    },

    /// No reader is registered for the file extension.
    #[error("no provider for file type: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Data could not be mapped onto (or from) a typed item.
    #[error("failed to map settings to {type_name}: {message}")]
    Mapping { type_name: String, message: String },
}

// --- Event Errors ---

/// Errors raised by the event bus.
#[derive(Debug, Error)]
pub enum EventError {
    /// A handler list could not be registered.
    #[error("failed to register handlers: {0}")]
    Registration(String),

    /// A monitor-level handler was registered for an event that cannot be copied.
    #[error("tried to register a handler on monitor level for the not monitorable event {event}")]
    NotMonitorable { event: &'static str },

    /// A handler failed while processing an event.
    #[error("failed to process handler for {event} at {priority} level: {source}")]
    HandlerFailed {
        event: &'static str,
        priority: HandlerPriority,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// --- Id Errors ---

/// Errors raised while parsing identifiers.
#[derive(Debug, Error)]
pub enum IdError {
    /// Namespaced id is not of the form `namespace:key`.
    #[error("invalid namespaced id: '{0}'")]
    InvalidNamespaced(String),

    /// Numeric id could not be parsed.
    #[error("invalid numeric id '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Unique id could not be parsed.
    #[error("invalid unique id '{value}': {source}")]
    InvalidUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// Numeric id does not fit the requested width.
    #[error("id {0} does not fit into 32 bits")]
    OutOfRange(i64),
}

#[cfg(test)]
mod tests;
