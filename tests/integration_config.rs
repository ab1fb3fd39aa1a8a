// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the layered loader with realistic `rub.toml` files.

use std::path::PathBuf;

use rub_common::config::Config;
use rub_common::config::loader::ConfigLoader;
use rub_common::project::DependencyScope;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_file_overrides_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("rub.toml");
    std::fs::write(
        &path,
        r#"
[global]
output_log_level = 4

[paths]
build = "target/rub"

[project.dependencies.slf4j]
catalog = "libs.slf4j-api"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.paths.build, Some(PathBuf::from("./target/rub")));
    assert_eq!(config.project.dependencies.len(), 3);
    assert_eq!(
        config.project.dependencies["slf4j"].scope,
        DependencyScope::Implementation
    );
    assert!(config.task_spec("exportResources").is_some());
}

#[test]
fn later_files_win() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[global]\ndry = true\noutput_log_level = 2").unwrap();
    std::fs::write(&local, "[global]\ndry = false").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level.as_u8(), 2);
}

#[test]
fn overrides_win_over_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("rub.toml");
    std::fs::write(&path, "[tasks.exportResources]\nenabled = true").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&path)
        .set_all(["tasks.exportResources.enabled=false"])
        .unwrap()
        .build()
        .unwrap();

    let (_, spec) = config.task_spec("exportResources").unwrap();
    assert!(!spec.enabled);
}

// =============================================================================
// Environment
// =============================================================================

fn env_loader<const N: usize>(vars: [(&str, &str); N]) -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("RUB").with_env_vars(vars)
}

#[test]
fn env_sets_multi_word_keys() {
    let config = env_loader([
        ("RUB_GLOBAL__OUTPUT_LOG_LEVEL", "2"),
        ("RUB_GLOBAL__LOG_JSON", "true"),
        ("RUB_GLOBAL__LOG_FILE", "logs/rub.log"),
        ("RUB_GLOBAL__DRY", "true"),
    ])
    .build()
    .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 2);
    assert!(config.global.log_json);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/rub.log")));
    assert!(config.global.dry);
}

#[test]
fn env_task_key_targets_declared_task() {
    let config = env_loader([("RUB_TASKS__EXPORTRESOURCES__ENABLED", "false")])
        .build()
        .unwrap();

    insta::assert_debug_snapshot!(config.tasks.keys().collect::<Vec<_>>(), @r#"
    [
        "exportResources",
    ]
    "#);
    assert!(!config.tasks["exportResources"].enabled);
}

#[test]
fn env_ignores_unrelated_variables() {
    let config = env_loader([
        ("RUB_HOME", "/x"),
        ("RUB_FOO", "bar"),
        ("RUBY_VERSION", "3.3"),
        ("RUB_PATHS__BUILD", "out"),
    ])
    .build()
    .unwrap();

    assert_eq!(config.paths.build, Some(PathBuf::from("./out")));
}

#[test]
fn set_overrides_win_over_env() {
    let config = env_loader([("RUB_GLOBAL__OUTPUT_LOG_LEVEL", "2")])
        .set_all(["global.output_log_level=5"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 5);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn dependency_needs_exactly_one_target() {
    let err = Config::parse(
        r#"
[project.dependencies.broken]
project = ":api"
catalog = "libs.jetanno"
"#,
    )
    .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"dependency 'broken' must set exactly one of 'project' or 'catalog'"
    );
}

#[test]
fn unknown_task_field_rejected() {
    assert!(Config::parse("[tasks.exportResources]\nsource = \"x\"").is_err());
}

#[test]
fn invalid_toml_rejected() {
    assert!(Config::parse("[global\ndry = true").is_err());
}
