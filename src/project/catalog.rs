// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version catalogs (`libs.versions.toml`).
//!
//! ```toml
//! [versions]
//! annotations = "26.0.2"
//!
//! [libraries]
//! jetanno = { module = "org.jetbrains:annotations", version.ref = "annotations" }
//! short   = "com.example:short:1.0"
//! split   = { group = "com.example", name = "split", version = "2.0" }
//! ```
//!
//! Aliases are normalized: `-` and `_` are treated as `.`, so `jet-anno`,
//! `jet_anno` and `jet.anno` name the same library.

use std::collections::BTreeMap;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{ProjectError, RubResult};

/// A library coordinate from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub group: String,
    pub name: String,
    pub version: Option<String>,
}

impl Library {
    /// `group:name` without version.
    #[must_use]
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{version}", self.group, self.name),
            None => write!(f, "{}:{}", self.group, self.name),
        }
    }
}

/// Parsed version catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    versions: BTreeMap<String, String>,
    libraries: BTreeMap<String, Library>,
}

impl VersionCatalog {
    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::CatalogRead` if the file cannot be read, or the
    /// parse error for an invalid catalog.
    pub fn load(path: &Path) -> RubResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            libraries = catalog.libraries.len(),
            "Loaded version catalog"
        );
        Ok(catalog)
    }

    /// Parses catalog content; `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::CatalogParse` for invalid TOML, and
    /// `InvalidLibrary` / `VersionRef` for malformed entries.
    pub fn parse(content: &str, origin: &str) -> std::result::Result<Self, ProjectError> {
        let table: Table = toml::from_str(content).map_err(|e| ProjectError::CatalogParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        let mut catalog = Self::default();

        if let Some(versions) = section(&table, "versions", origin)? {
            for (alias, value) in versions {
                let version = plain_version(value).ok_or_else(|| ProjectError::InvalidLibrary {
                    alias: alias.clone(),
                    message: "version must be a string or a rich version table".to_string(),
                })?;
                catalog.versions.insert(normalize_alias(alias), version);
            }
        }

        if let Some(libraries) = section(&table, "libraries", origin)? {
            for (alias, value) in libraries {
                let library = catalog.parse_library(alias, value)?;
                catalog.libraries.insert(normalize_alias(alias), library);
            }
        }

        Ok(catalog)
    }

    /// Looks up a library by (un-normalized) alias.
    #[must_use]
    pub fn library(&self, alias: &str) -> Option<&Library> {
        self.libraries.get(&normalize_alias(alias))
    }

    /// Looks up a declared version by (un-normalized) alias.
    #[must_use]
    pub fn version(&self, alias: &str) -> Option<&str> {
        self.versions.get(&normalize_alias(alias)).map(String::as_str)
    }

    /// All libraries keyed by normalized alias.
    #[must_use]
    pub const fn libraries(&self) -> &BTreeMap<String, Library> {
        &self.libraries
    }

    fn parse_library(&self, alias: &str, value: &Value) -> std::result::Result<Library, ProjectError> {
        let invalid = |message: &str| ProjectError::InvalidLibrary {
            alias: alias.to_string(),
            message: message.to_string(),
        };

        match value {
            Value::String(notation) => {
                let parts: Vec<&str> = notation.split(':').collect();
                match parts.as_slice() {
                    [group, name] if !group.is_empty() && !name.is_empty() => Ok(Library {
                        group: (*group).to_string(),
                        name: (*name).to_string(),
                        version: None,
                    }),
                    [group, name, version]
                        if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
                    {
                        Ok(Library {
                            group: (*group).to_string(),
                            name: (*name).to_string(),
                            version: Some((*version).to_string()),
                        })
                    }
                    _ => Err(invalid("expected 'group:name' or 'group:name:version'")),
                }
            }
            Value::Table(entry) => {
                let (group, name) = match (entry.get("module"), entry.get("group"), entry.get("name")) {
                    (Some(Value::String(module)), None, None) => module
                        .split_once(':')
                        .filter(|(g, n)| !g.is_empty() && !n.is_empty() && !n.contains(':'))
                        .map(|(g, n)| (g.to_string(), n.to_string()))
                        .ok_or_else(|| invalid("module must be 'group:name'"))?,
                    (None, Some(Value::String(group)), Some(Value::String(name))) => {
                        (group.clone(), name.clone())
                    }
                    _ => return Err(invalid("expected 'module' or 'group' and 'name'")),
                };

                let version = match entry.get("version") {
                    None => None,
                    Some(Value::Table(rich)) if rich.contains_key("ref") => {
                        let Some(Value::String(reference)) = rich.get("ref") else {
                            return Err(invalid("version.ref must be a string"));
                        };
                        let resolved = self.version(reference).ok_or_else(|| {
                            ProjectError::VersionRef {
                                alias: alias.to_string(),
                                version: reference.clone(),
                            }
                        })?;
                        Some(resolved.to_string())
                    }
                    Some(other) => Some(
                        plain_version(other)
                            .ok_or_else(|| invalid("version must be a string or a table"))?,
                    ),
                };

                Ok(Library {
                    group,
                    name,
                    version,
                })
            }
            _ => Err(invalid("expected a string or a table")),
        }
    }
}

/// Normalizes a catalog alias: `-` and `_` become `.`.
#[must_use]
pub fn normalize_alias(alias: &str) -> String {
    alias.replace(['-', '_'], ".")
}

fn section<'a>(
    table: &'a Table,
    name: &str,
    origin: &str,
) -> std::result::Result<Option<&'a Table>, ProjectError> {
    match table.get(name) {
        None => Ok(None),
        Some(Value::Table(section)) => Ok(Some(section)),
        Some(_) => Err(ProjectError::CatalogParse {
            path: origin.to_string(),
            message: format!("[{name}] must be a table"),
        }),
    }
}

/// A version string, or the first of `strictly`/`require`/`prefer` in a rich
/// version table.
fn plain_version(value: &Value) -> Option<String> {
    match value {
        Value::String(version) => Some(version.clone()),
        Value::Table(rich) => ["strictly", "require", "prefer"]
            .iter()
            .find_map(|key| rich.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}
