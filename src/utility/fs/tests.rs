// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{copy_dir_contents_async, copy_dir_filtered_async};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn populate(root: &Path) {
    std::fs::create_dir_all(root.join("lang/en")).unwrap();
    std::fs::write(root.join("config.yml"), "debug: false").unwrap();
    std::fs::write(root.join("lang/en/messages.yml"), "hello: Hello").unwrap();
    std::fs::write(root.join("lang/readme.txt"), "translations").unwrap();
}

#[tokio::test]
async fn test_copy_dir_contents_preserves_tree() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("out/nested");
    populate(&src);

    let copied = copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(copied, 3);
    assert_eq!(
        std::fs::read_to_string(dst.join("lang/en/messages.yml")).unwrap(),
        "hello: Hello"
    );
    assert_eq!(
        std::fs::read_to_string(dst.join("config.yml")).unwrap(),
        "debug: false"
    );
}

#[tokio::test]
async fn test_copy_dir_overwrites_existing() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    populate(&src);
    std::fs::create_dir_all(&dst).unwrap();
    std::fs::write(dst.join("config.yml"), "stale").unwrap();

    copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(dst.join("config.yml")).unwrap(),
        "debug: false"
    );
}

#[tokio::test]
async fn test_copy_dir_filtered() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    populate(&src);

    let only_yaml = |path: &Path| path.extension().is_some_and(|ext| ext == "yml");
    let copied = copy_dir_filtered_async(&src, &dst, &only_yaml).await.unwrap();

    assert_eq!(copied, 2);
    assert!(dst.join("lang/en/messages.yml").is_file());
    assert!(!dst.join("lang/readme.txt").exists());
}

#[tokio::test]
async fn test_copy_dir_filtered_skips_empty_subtrees() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    populate(&src);

    let top_level = |path: &Path| path.components().count() == 1;
    let copied = copy_dir_filtered_async(&src, &dst, &top_level).await.unwrap();

    assert_eq!(copied, 1);
    assert!(dst.is_dir());
    assert!(!dst.join("lang").exists());
}

#[tokio::test]
async fn test_copy_dir_missing_source() {
    let temp = temp_dir();
    let result = copy_dir_contents_async(&temp.path().join("absent"), &temp.path().join("dst")).await;

    assert!(result.is_err());
}
