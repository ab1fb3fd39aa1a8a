// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a [`ProjectConfig`] against a project root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};


use super::{DependencyScope, Library, ProjectConfig, VersionCatalog, normalize_module_id};
use crate::error::{ProjectError, RubResult};

/// What a dependency points at after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// An included module of this project.
    Module { id: String, dir: PathBuf },
    /// A catalog library.
    Library(Library),
}

impl std::fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Module { id, .. } => write!(f, ":{id}"),
            Self::Library(library) => std::fmt::Display::fmt(library, f),
        }
    }
}

/// A dependency declaration with its target resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub name: String,
    pub scope: DependencyScope,
    pub target: ResolvedTarget,
}

/// A project with modules, catalogs and dependencies resolved.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    name: String,
    root: PathBuf,
    modules: BTreeMap<String, PathBuf>,
    repositories: Vec<String>,
    dependencies: Vec<ResolvedDependency>,
}

impl ProjectLayout {
    /// Resolves module directories against `root` and dependency references
    /// against the modules and catalogs.
    ///
    /// Catalog files are read only when a dependency refers to them.
    ///
    /// # Errors
    ///
    /// Returns a `ProjectError` for unknown modules, catalogs or aliases and
    /// malformed declarations, or an error if a referenced catalog cannot be
    /// read.
    pub fn resolve(config: &ProjectConfig, root: &Path) -> RubResult<Self> {
        let modules: BTreeMap<String, PathBuf> = config
            .modules
            .iter()
            .map(|(id, dir)| (normalize_module_id(id).to_string(), root.join(dir)))
            .collect();

        let mut catalogs: BTreeMap<&str, VersionCatalog> = BTreeMap::new();
        let mut dependencies = Vec::with_capacity(config.dependencies.len());

        for (name, spec) in &config.dependencies {
            spec.validate(name)?;

            let target = if let Some(project) = &spec.project {
                let id = normalize_module_id(project);
                let dir = modules
                    .get(id)
                    .ok_or_else(|| ProjectError::UnknownModule(project.clone()))?;
                ResolvedTarget::Module {
                    id: id.to_string(),
                    dir: dir.clone(),
                }
            } else if let Some(reference) = &spec.catalog {
                let (catalog_name, alias) = reference
                    .split_once('.')
                    .ok_or_else(|| ProjectError::UnknownCatalog(reference.clone()))?;
                let (catalog_name, file) = config
                    .catalogs
                    .get_key_value(catalog_name)
                    .ok_or_else(|| ProjectError::UnknownCatalog(catalog_name.to_string()))?;

                if !catalogs.contains_key(catalog_name.as_str()) {
                    let path = root.join(file);
                    catalogs.insert(catalog_name.as_str(), VersionCatalog::load(&path)?);
                }

                let library = catalogs
                    .get(catalog_name.as_str())
                    .and_then(|catalog| catalog.library(alias))
                    .ok_or_else(|| ProjectError::UnknownLibrary {
                        catalog: catalog_name.clone(),
                        alias: alias.to_string(),
                    })?;
                ResolvedTarget::Library(library.clone())
            } else {
                return Err(ProjectError::InvalidDependency(name.clone()).into());
            };

            tracing::debug!(dependency = %name, scope = %spec.scope, target = %target, "Resolved dependency");
            dependencies.push(ResolvedDependency {
                name: name.clone(),
                scope: spec.scope,
                target,
            });
        }

        Ok(Self {
            name: config.name.clone(),
            root: root.to_path_buf(),
            modules,
            repositories: config.repositories.clone(),
            dependencies,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a module, accepting `api` or `:api`.
    #[must_use]
    pub fn module_dir(&self, id: &str) -> Option<&Path> {
        self.modules.get(normalize_module_id(id)).map(PathBuf::as_path)
    }

    #[must_use]
    pub const fn modules(&self) -> &BTreeMap<String, PathBuf> {
        &self.modules
    }

    #[must_use]
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    #[must_use]
    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }

    /// Dependencies that appear in published metadata (implementation scope).
    pub fn published_dependencies(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.dependencies.iter().filter(|dep| dep.scope.is_published())
    }

    /// Checks that every module directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::ModuleDirMissing` for the first missing module.
    pub fn verify(&self) -> std::result::Result<(), ProjectError> {
        for (id, dir) in &self.modules {
            if !dir.is_dir() {
                return Err(ProjectError::ModuleDirMissing {
                    module: format!(":{id}"),
                    path: dir.display().to_string(),
                });
            }
        }
        Ok(())
    }
}
