// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use super::{
    DependencyScope, DependencySpec, ProjectConfig, ProjectLayout, ResolvedTarget, VersionCatalog,
};
use crate::error::{ProjectError, RubError, RubResult};

const CATALOG: &str = r#"
[versions]
annotations = "26.0.2"
serde-core = { strictly = "1.0.228" }

[libraries]
jetanno = { module = "org.jetbrains:annotations", version.ref = "annotations" }
short = "com.example:short:1.0"
unversioned = "com.example:bom"
split-name = { group = "com.example", name = "split", version = "2.0" }
serde_json = { module = "io.serde:json", version = { ref = "serde.core" } }
"#;

fn project_dir() -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::create_dir(temp.path().join("rub-api")).unwrap();
    std::fs::write(temp.path().join("libs.versions.toml"), CATALOG).unwrap();
    temp
}

fn error_of<T: std::fmt::Debug>(result: RubResult<T>) -> ProjectError {
    match result.unwrap_err() {
        RubError::Project(err) => *err,
        other => panic!("expected a ProjectError, got {other:?}"),
    }
}

// --- Catalog ---

#[test]
fn test_catalog_entries() {
    let catalog = VersionCatalog::parse(CATALOG, "libs.versions.toml").unwrap();

    let coordinates: Vec<String> = catalog
        .libraries()
        .iter()
        .map(|(alias, lib)| format!("{alias} = {lib}"))
        .collect();
    insta::assert_debug_snapshot!(coordinates, @r#"
    [
        "jetanno = org.jetbrains:annotations:26.0.2",
        "serde.json = io.serde:json:1.0.228",
        "short = com.example:short:1.0",
        "split.name = com.example:split:2.0",
        "unversioned = com.example:bom",
    ]
    "#);
}

#[test]
fn test_catalog_alias_normalization() {
    let catalog = VersionCatalog::parse(CATALOG, "libs.versions.toml").unwrap();
    assert_eq!(catalog.library("split_name"), catalog.library("split.name"));
    assert!(catalog.library("split-name").is_some());
    assert_eq!(catalog.version("serde_core"), Some("1.0.228"));
    assert_eq!(
        catalog.library("jetanno").unwrap().module(),
        "org.jetbrains:annotations"
    );
}

#[test]
fn test_catalog_missing_version_ref() {
    let content = r#"
[libraries]
broken = { module = "a:b", version.ref = "nope" }
"#;
    let err = VersionCatalog::parse(content, "libs.versions.toml").unwrap_err();
    assert!(matches!(err, ProjectError::VersionRef { .. }));
    insta::assert_snapshot!(err.to_string(), @"library 'broken' refers to unknown version 'nope'");
}

#[test]
fn test_catalog_invalid_entries() {
    for content in [
        "[libraries]\nbad = \"no-colon\"",
        "[libraries]\nbad = 42",
        "[libraries]\nbad = { name = \"only-name\" }",
        "[libraries]\nbad = { module = \"a:b:c\" }",
    ] {
        let err = VersionCatalog::parse(content, "libs.versions.toml").unwrap_err();
        assert!(
            matches!(err, ProjectError::InvalidLibrary { ref alias, .. } if alias == "bad"),
            "unexpected error for {content:?}: {err}"
        );
    }

    let err = VersionCatalog::parse("libraries = 3", "x.toml").unwrap_err();
    assert!(matches!(err, ProjectError::CatalogParse { .. }));
}

#[test]
fn test_catalog_load_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("absent.toml");
    let err = error_of(VersionCatalog::load(&path));
    assert!(
        matches!(&err, ProjectError::CatalogRead { path: p, .. } if *p == path),
        "unexpected error: {err}"
    );
}

#[test]
fn test_resolve_reports_unreadable_catalog() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("rub-api")).unwrap();

    let err = error_of(ProjectLayout::resolve(&ProjectConfig::default(), temp.path()));
    assert!(matches!(err, ProjectError::CatalogRead { .. }), "unexpected error: {err}");
}

// --- Config ---

#[test]
fn test_default_project_config() {
    let config = ProjectConfig::default();
    assert_eq!(config.name, "rub-common");
    assert_eq!(config.module_dir(":api").unwrap(), Path::new("rub-api"));
    assert_eq!(config.module_dir("api").unwrap(), Path::new("rub-api"));
    assert_eq!(config.repositories.len(), 2);

    let jetanno = &config.dependencies["jetanno"];
    assert_eq!(jetanno.scope, DependencyScope::CompileOnly);
    assert!(!jetanno.is_published());
    assert!(config.dependencies["api"].is_published());
}

#[test]
fn test_scope_serde_names() {
    let spec: DependencySpec =
        toml::from_str("catalog = \"libs.x\"\nscope = \"compile-only\"").unwrap();
    assert_eq!(spec.scope, DependencyScope::CompileOnly);
    assert_eq!(DependencyScope::Implementation.to_string(), "implementation");

    let spec: DependencySpec = toml::from_str("project = \":api\"").unwrap();
    assert_eq!(spec.scope, DependencyScope::Implementation);
}

#[test]
fn test_dependency_needs_one_target() {
    let both = DependencySpec {
        project: Some(":api".to_string()),
        catalog: Some("libs.jetanno".to_string()),
        scope: DependencyScope::Implementation,
    };
    assert!(both.validate("both").is_err());
    assert!(DependencySpec::default().validate("none").is_err());
    assert!(DependencySpec::project(":api").validate("api").is_ok());
}

// --- Layout ---

#[test]
fn test_layout_resolves_defaults() {
    let temp = project_dir();
    let layout = ProjectLayout::resolve(&ProjectConfig::default(), temp.path()).unwrap();

    assert_eq!(layout.name(), "rub-common");
    assert_eq!(
        layout.module_dir(":api").unwrap(),
        temp.path().join("rub-api")
    );
    layout.verify().unwrap();

    let resolved: Vec<String> = layout
        .dependencies()
        .iter()
        .map(|dep| format!("{} {} {}", dep.name, dep.scope, dep.target))
        .collect();
    insta::assert_debug_snapshot!(resolved, @r#"
    [
        "api implementation :api",
        "jetanno compile-only org.jetbrains:annotations:26.0.2",
    ]
    "#);
}

#[test]
fn test_published_dependencies_exclude_compile_only() {
    let temp = project_dir();
    let layout = ProjectLayout::resolve(&ProjectConfig::default(), temp.path()).unwrap();

    let published: Vec<&str> = layout
        .published_dependencies()
        .map(|dep| dep.name.as_str())
        .collect();
    assert_eq!(published, ["api"]);
    assert!(matches!(
        layout.published_dependencies().next().unwrap().target,
        ResolvedTarget::Module { ref id, .. } if id == "api"
    ));
}

#[test]
fn test_layout_unknown_module() {
    let temp = project_dir();
    let mut config = ProjectConfig::default();
    config
        .dependencies
        .insert("core".to_string(), DependencySpec::project(":core"));

    let err = error_of(ProjectLayout::resolve(&config, temp.path()));
    insta::assert_snapshot!(err.to_string(), @"unknown module ':core'");
}

#[test]
fn test_layout_unknown_catalog_and_alias() {
    let temp = project_dir();

    let mut config = ProjectConfig::default();
    config.dependencies.insert(
        "guava".to_string(),
        DependencySpec::catalog("deps.guava", DependencyScope::Implementation),
    );
    let err = error_of(ProjectLayout::resolve(&config, temp.path()));
    assert!(matches!(err, ProjectError::UnknownCatalog(ref name) if name == "deps"));

    let mut config = ProjectConfig::default();
    config.dependencies.insert(
        "guava".to_string(),
        DependencySpec::catalog("libs.guava", DependencyScope::Implementation),
    );
    let err = error_of(ProjectLayout::resolve(&config, temp.path()));
    insta::assert_snapshot!(err.to_string(), @"catalog 'libs' has no library 'guava'");
}

#[test]
fn test_layout_skips_unreferenced_catalog() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = ProjectConfig::default();
    config.dependencies.remove("jetanno");

    // libs.versions.toml does not exist, but nothing refers to it
    let layout = ProjectLayout::resolve(&config, temp.path()).unwrap();
    assert_eq!(layout.dependencies().len(), 1);

    let err = layout.verify().unwrap_err();
    assert!(matches!(err, ProjectError::ModuleDirMissing { .. }));
}
