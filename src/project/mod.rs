// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project descriptor: modules, catalogs and dependency declarations.
//!
//! ```text
//! [project]                              ProjectLayout::resolve(config, root)
//!   name         "rub-common"                 |
//!   modules      api --> rub-api              +--> modules   :api --> <root>/rub-api
//!   catalogs     libs --> libs.versions.toml  +--> catalogs  libs --> VersionCatalog
//!   dependencies                              +--> dependencies
//!     api      project ":api"   implementation      Module(":api")
//!     jetanno  catalog "libs.jetanno" compile-only  Library(org.jetbrains:annotations:26.0.2)
//!
//! published_dependencies()  implementation scope only
//! ```

pub mod catalog;
pub mod layout;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

pub use catalog::{Library, VersionCatalog};
pub use layout::{ProjectLayout, ResolvedDependency, ResolvedTarget};

/// Plugin portal used to resolve build plugins.
pub const PLUGIN_PORTAL: &str = "https://plugins.gradle.org/m2/";

/// Central artifact repository.
pub const MAVEN_CENTRAL: &str = "https://repo.maven.apache.org/maven2/";

/// The `[project]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root project name.
    pub name: String,
    /// Included modules: id --> directory relative to the project root.
    pub modules: BTreeMap<String, PathBuf>,
    /// Named dependency catalogs: name --> catalog file.
    pub catalogs: BTreeMap<String, PathBuf>,
    /// Plugin repositories, in lookup order.
    pub repositories: Vec<String>,
    /// Dependency declarations of the root project.
    pub dependencies: BTreeMap<String, DependencySpec>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "rub-common".to_string(),
            modules: BTreeMap::from([("api".to_string(), PathBuf::from("rub-api"))]),
            catalogs: BTreeMap::from([("libs".to_string(), PathBuf::from("libs.versions.toml"))]),
            repositories: vec![PLUGIN_PORTAL.to_string(), MAVEN_CENTRAL.to_string()],
            dependencies: BTreeMap::from([
                ("api".to_string(), DependencySpec::project(":api")),
                (
                    "jetanno".to_string(),
                    DependencySpec::catalog("libs.jetanno", DependencyScope::CompileOnly),
                ),
            ]),
        }
    }
}

impl ProjectConfig {
    /// Directory of a module, accepting `api` or `:api`.
    #[must_use]
    pub fn module_dir(&self, id: &str) -> Option<&PathBuf> {
        self.modules.get(normalize_module_id(id))
    }
}

/// How far a dependency is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyScope {
    /// Compiled against and propagated to consumers.
    #[default]
    Implementation,
    /// Compiled against only; absent from published metadata.
    CompileOnly,
}

impl DependencyScope {
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Implementation)
    }
}

impl std::fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Implementation => write!(f, "implementation"),
            Self::CompileOnly => write!(f, "compile-only"),
        }
    }
}

/// One dependency declaration: either a module or a catalog library.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencySpec {
    /// Module reference, e.g. `:api`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Catalog reference, e.g. `libs.jetanno`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    pub scope: DependencyScope,
}

impl DependencySpec {
    /// Implementation-scope module dependency.
    #[must_use]
    pub fn project(id: &str) -> Self {
        Self {
            project: Some(id.to_string()),
            catalog: None,
            scope: DependencyScope::Implementation,
        }
    }

    #[must_use]
    pub fn catalog(reference: &str, scope: DependencyScope) -> Self {
        Self {
            project: None,
            catalog: Some(reference.to_string()),
            scope,
        }
    }

    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.scope.is_published()
    }

    /// Checks that exactly one target is set.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::InvalidDependency` naming the declaration.
    pub fn validate(&self, name: &str) -> Result<(), ProjectError> {
        match (&self.project, &self.catalog) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(ProjectError::InvalidDependency(name.to_string())),
        }
    }
}

/// Strips the leading `:` of a module path.
#[must_use]
pub fn normalize_module_id(id: &str) -> &str {
    id.strip_prefix(':').unwrap_or(id)
}
