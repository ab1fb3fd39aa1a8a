// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::CopyTask;
use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::config::types::TaskSpec;
use crate::task::{TaskContext, Taskable};

fn paths(root: &Path) -> PathsConfig {
    let mut paths = PathsConfig {
        prefix: Some(root.to_path_buf()),
        build: None,
    };
    paths.resolve().unwrap();
    paths
}

fn context(dry_run: bool) -> TaskContext {
    TaskContext::new(Arc::new(Config::default()), CancellationToken::new()).with_dry_run(dry_run)
}

fn export_spec() -> TaskSpec {
    TaskSpec::copy("src/main/resources", "${buildDir}/exportedResources")
}

fn write_resource(root: &Path, relative: &str, content: &str) {
    let path = root.join("src/main/resources").join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_from_spec_expands_paths() {
    let paths = paths(Path::new("/project"));
    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths).unwrap();

    assert_eq!(task.name(), "exportResources");
    assert_eq!(task.source(), Path::new("/project/src/main/resources"));
    assert_eq!(
        task.destination(),
        Path::new("/project/build/exportedResources")
    );
    assert!(task.include().is_empty());
}

#[test]
fn test_from_spec_keeps_enabled_flag() {
    let paths = paths(Path::new("/project"));
    let spec = TaskSpec {
        enabled: false,
        ..export_spec()
    };
    let task = CopyTask::from_spec("exportResources", &spec, &paths).unwrap();

    assert!(!task.enabled(&context(false)));
}

#[test]
fn test_invalid_include_pattern() {
    let err = CopyTask::new("exportResources", "a", "b")
        .with_include(["{yml,json".to_string()])
        .unwrap_err();

    assert!(
        err.to_string()
            .starts_with("invalid value for 'include' in section '[tasks.exportResources]'"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_copy_exports_resources() {
    let temp = tempfile::tempdir().unwrap();
    write_resource(temp.path(), "x.txt", "exported content");
    write_resource(temp.path(), "lang/en.yml", "hello: Hello");

    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths(temp.path())).unwrap();
    task.run(&context(false)).await.unwrap();

    let out = temp.path().join("build/exportedResources");
    assert_eq!(
        std::fs::read_to_string(out.join("x.txt")).unwrap(),
        "exported content"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("lang/en.yml")).unwrap(),
        "hello: Hello"
    );
}

#[tokio::test]
async fn test_copy_with_include_filter() {
    let temp = tempfile::tempdir().unwrap();
    write_resource(temp.path(), "x.txt", "text");
    write_resource(temp.path(), "lang/en.yml", "hello: Hello");

    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths(temp.path()))
        .unwrap()
        .with_include(["**/*.yml".to_string()])
        .unwrap();
    task.run(&context(false)).await.unwrap();

    let out = temp.path().join("build/exportedResources");
    assert!(out.join("lang/en.yml").is_file());
    assert!(!out.join("x.txt").exists());
}

#[tokio::test]
async fn test_copy_missing_source_is_noop() {
    let temp = tempfile::tempdir().unwrap();

    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths(temp.path())).unwrap();
    task.run(&context(false)).await.unwrap();

    assert!(!temp.path().join("build").exists());
}

#[tokio::test]
async fn test_copy_source_is_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("resources.txt");
    std::fs::write(&file, "").unwrap();

    let task = CopyTask::new("exportResources", &file, temp.path().join("out"));
    let err = task.run(&context(false)).await.unwrap_err();

    assert!(err.to_string().contains("is not a directory"), "unexpected error: {err}");
}

// A file in the middle of the source path fails with ENOTDIR, not NotFound.
#[cfg(unix)]
#[tokio::test]
async fn test_copy_unreadable_source_is_error() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("src")).unwrap();
    std::fs::write(temp.path().join("src/main"), "").unwrap();

    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths(temp.path())).unwrap();
    let err = task.run(&context(false)).await.unwrap_err();

    assert!(
        err.to_string().contains("Task 'exportResources' cannot access"),
        "unexpected error: {err}"
    );
    let io = err.downcast_ref::<std::io::Error>().unwrap();
    assert_ne!(io.kind(), std::io::ErrorKind::NotFound);
    assert!(!temp.path().join("build").exists());
}

#[tokio::test]
async fn test_copy_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    write_resource(temp.path(), "x.txt", "text");

    let task = CopyTask::from_spec("exportResources", &export_spec(), &paths(temp.path())).unwrap();
    task.run(&context(true)).await.unwrap();

    assert!(!PathBuf::from(task.destination()).exists());
}
