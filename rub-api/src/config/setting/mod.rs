// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cached key lookups across configuration files.
//!
//! ```text
//! Setting<T>(file, key)
//!      |
//!      v
//! SettingProvider (Mutex)
//!   formats: ext  --> ConfigFormat   json, yml, yaml, toml
//!   cache:   path --> ConfigData     loaded on first read
//!
//! read()       cache hit or load + insert
//! reload()     load + replace
//! reload_all() every cached file
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ConfigData, ConfigFormat, extension_of};
use crate::error::ConfigError;

/// Thread-safe cache of configuration files keyed by path.
pub struct SettingProvider {
    state: Mutex<ProviderState>,
}

struct ProviderState {
    formats: HashMap<String, ConfigFormat>,
    cache: HashMap<PathBuf, ConfigData>,
}

impl ProviderState {
    fn format_for(&self, path: &Path) -> Option<ConfigFormat> {
        self.formats.get(&extension_of(path)).copied()
    }

    fn require_format(&self, path: &Path) -> Result<ConfigFormat, ConfigError> {
        self.format_for(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                extension: extension_of(path),
            })
    }
}

impl SettingProvider {
    /// Creates a provider with the built-in `json`, `yml`, `yaml` and `toml`
    /// extensions registered and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        let formats = [
            ("json", ConfigFormat::Json),
            ("yml", ConfigFormat::Yaml),
            ("yaml", ConfigFormat::Yaml),
            ("toml", ConfigFormat::Toml),
        ]
        .into_iter()
        .map(|(ext, format)| (ext.to_string(), format))
        .collect();

        Self {
            state: Mutex::new(ProviderState {
                formats,
                cache: HashMap::new(),
            }),
        }
    }

    /// Process-wide shared provider.
    #[must_use]
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<SettingProvider>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    fn lock(&self) -> MutexGuard<'_, ProviderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Maps an extension (case-insensitive, without the dot) to a format.
    pub fn register(&self, extension: &str, format: ConfigFormat) {
        self.lock()
            .formats
            .insert(extension.to_ascii_lowercase(), format);
    }

    /// Reads a top-level key, loading and caching the file on first access.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown extensions and the
    /// reader's error if the file cannot be loaded.
    pub fn read(&self, file: impl AsRef<Path>, key: &str) -> Result<Option<Value>, ConfigError> {
        let path = file.as_ref();
        let mut state = self.lock();
        let format = state.require_format(path)?;

        let data = match state.cache.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::debug!(path = %path.display(), "Caching settings file");
                entry.insert(format.reader().load(path)?)
            }
        };

        Ok(data.get(key).cloned())
    }

    /// Re-reads a file and replaces its cache entry.
    ///
    /// Files with an unknown extension are ignored.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if the file cannot be loaded; the previous
    /// cache entry is kept in that case.
    pub fn reload(&self, file: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = file.as_ref();
        let mut state = self.lock();
        let Some(format) = state.format_for(path) else {
            tracing::debug!(path = %path.display(), "No provider for file, skipping reload");
            return Ok(());
        };

        let data = format.reader().load(path)?;
        state.cache.insert(path.to_path_buf(), data);
        tracing::debug!(path = %path.display(), "Reloaded settings file");
        Ok(())
    }

    /// Reloads every cached file.
    ///
    /// # Errors
    ///
    /// All files are attempted; the first failure is returned.
    pub fn reload_all(&self) -> Result<(), ConfigError> {
        let mut first_error = None;
        for path in self.cached_files() {
            if let Err(e) = self.reload(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to reload settings file");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Sets a top-level key and writes the whole document back to disk.
    ///
    /// A file that does not exist yet starts as an empty document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown extensions, the
    /// reader's error if an existing file cannot be loaded, and the writer's
    /// error if saving fails. A failed save leaves the cache untouched.
    pub fn write(
        &self,
        file: impl AsRef<Path>,
        key: &str,
        value: Value,
    ) -> Result<(), ConfigError> {
        let path = file.as_ref();
        let mut state = self.lock();
        let format = state.require_format(path)?;

        let mut data = match state.cache.get(path) {
            Some(cached) => cached.clone(),
            None if path.exists() => format.reader().load(path)?,
            None => ConfigData::new(),
        };
        data.insert(key.to_string(), value);

        // The cache only changes once the document is on disk.
        format.reader().save(path, &data)?;
        state.cache.insert(path.to_path_buf(), data);
        Ok(())
    }

    /// Drops a file from the cache. Returns whether it was cached.
    pub fn invalidate(&self, file: impl AsRef<Path>) -> bool {
        self.lock().cache.remove(file.as_ref()).is_some()
    }

    /// Paths currently held in the cache, sorted.
    #[must_use]
    pub fn cached_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.lock().cache.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Default for SettingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SettingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingProvider")
            .field("cached_files", &self.cached_files())
            .finish_non_exhaustive()
    }
}

/// Typed handle to one key of one configuration file.
pub struct Setting<T> {
    provider: Arc<SettingProvider>,
    file: PathBuf,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Setting<T> {
    /// Creates a handle backed by [`SettingProvider::global`].
    ///
    /// The file is read once so that missing or unsupported files fail here.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the file cannot be read.
    pub fn new(file: impl Into<PathBuf>, key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_provider(SettingProvider::global(), file, key)
    }

    /// Creates a handle backed by a specific provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the file cannot be read.
    pub fn with_provider(
        provider: Arc<SettingProvider>,
        file: impl Into<PathBuf>,
        key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let setting = Self {
            provider,
            file: file.into(),
            key: key.into(),
            _marker: PhantomData,
        };
        setting.provider.read(&setting.file, &setting.key)?;
        Ok(setting)
    }

    /// Current value, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Mapping` if the value does not deserialize into `T`.
    pub fn get(&self) -> Result<Option<T>, ConfigError> {
        self.provider
            .read(&self.file, &self.key)?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| ConfigError::Mapping {
                    type_name: std::any::type_name::<T>().to_string(),
                    message: format!("key '{}': {e}", self.key),
                })
            })
            .transpose()
    }

    /// Reloads the backing file.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the file cannot be loaded.
    pub fn reload(&self) -> Result<(), ConfigError> {
        self.provider.reload(&self.file)
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> std::fmt::Debug for Setting<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Setting")
            .field("file", &self.file)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
