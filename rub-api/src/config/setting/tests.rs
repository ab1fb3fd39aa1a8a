// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use serde_json::json;

use super::{Setting, SettingProvider};
use crate::config::ConfigFormat;
use crate::error::ConfigError;

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_read_caches_until_reload() {
    let temp = temp_dir();
    let path = temp.path().join("server.json");
    std::fs::write(&path, r#"{ "port": 25565 }"#).unwrap();

    let provider = SettingProvider::new();
    assert_eq!(provider.read(&path, "port").unwrap(), Some(json!(25565)));

    std::fs::write(&path, r#"{ "port": 25566 }"#).unwrap();
    assert_eq!(provider.read(&path, "port").unwrap(), Some(json!(25565)));

    provider.reload(&path).unwrap();
    assert_eq!(provider.read(&path, "port").unwrap(), Some(json!(25566)));
}

#[test]
fn test_read_missing_key() {
    let temp = temp_dir();
    let path = temp.path().join("server.yml");
    std::fs::write(&path, "port: 1\n").unwrap();

    let provider = SettingProvider::new();
    assert_eq!(provider.read(&path, "motd").unwrap(), None);
}

#[test]
fn test_read_unsupported_extension() {
    let provider = SettingProvider::new();
    let err = provider.read("server.ini", "port").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedFormat { ref extension } if extension == "ini"
    ));
}

#[test]
fn test_reload_unsupported_extension_is_noop() {
    let provider = SettingProvider::new();
    assert!(provider.reload("server.ini").is_ok());
    assert!(provider.cached_files().is_empty());
}

#[test]
fn test_register_extension() {
    let temp = temp_dir();
    let path = temp.path().join("server.conf");
    std::fs::write(&path, "port = 7\n").unwrap();

    let provider = SettingProvider::new();
    provider.register("CONF", ConfigFormat::Toml);
    assert_eq!(provider.read(&path, "port").unwrap(), Some(json!(7)));
}

#[test]
fn test_reload_all_reports_first_error() {
    let temp = temp_dir();
    let good = temp.path().join("a.toml");
    let bad = temp.path().join("b.toml");
    std::fs::write(&good, "value = 1\n").unwrap();
    std::fs::write(&bad, "value = 2\n").unwrap();

    let provider = SettingProvider::new();
    provider.read(&good, "value").unwrap();
    provider.read(&bad, "value").unwrap();

    std::fs::write(&good, "value = 3\n").unwrap();
    std::fs::remove_file(&bad).unwrap();

    assert!(matches!(
        provider.reload_all(),
        Err(ConfigError::Read { .. })
    ));
    assert_eq!(provider.read(&good, "value").unwrap(), Some(json!(3)));
    assert_eq!(provider.read(&bad, "value").unwrap(), Some(json!(2)));
}

#[test]
fn test_write_persists_document() {
    let temp = temp_dir();
    let path = temp.path().join("fresh.yaml");

    let provider = SettingProvider::new();
    provider.write(&path, "motd", json!("hello")).unwrap();
    provider.write(&path, "slots", json!(8)).unwrap();

    let reloaded = SettingProvider::new();
    assert_eq!(reloaded.read(&path, "motd").unwrap(), Some(json!("hello")));
    assert_eq!(reloaded.read(&path, "slots").unwrap(), Some(json!(8)));
}

#[test]
fn test_setting_typed_access() {
    let temp = temp_dir();
    let path = temp.path().join("lobby.toml");
    std::fs::write(&path, "slots = 12\nname = \"hub\"\n").unwrap();

    let provider = Arc::new(SettingProvider::new());
    let slots: Setting<u32> = Setting::with_provider(Arc::clone(&provider), &path, "slots").unwrap();
    assert_eq!(slots.get().unwrap(), Some(12));

    std::fs::write(&path, "slots = 14\n").unwrap();
    slots.reload().unwrap();
    assert_eq!(slots.get().unwrap(), Some(14));
    assert_eq!(slots.file(), path.as_path());
    assert_eq!(provider.cached_files(), vec![path.clone()]);
}

#[test]
fn test_setting_type_mismatch() {
    let temp = temp_dir();
    let path = temp.path().join("lobby.json");
    std::fs::write(&path, r#"{ "name": "hub" }"#).unwrap();

    let setting: Setting<u32> =
        Setting::with_provider(Arc::new(SettingProvider::new()), &path, "name").unwrap();
    assert!(matches!(setting.get(), Err(ConfigError::Mapping { .. })));
}

#[test]
fn test_setting_missing_file_fails_eagerly() {
    let temp = temp_dir();
    let result: Result<Setting<String>, _> = Setting::with_provider(
        Arc::new(SettingProvider::new()),
        temp.path().join("missing.json"),
        "name",
    );
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_failed_write_keeps_cache_in_sync() {
    let temp = temp_dir();
    let path = temp.path().join("server.toml");
    std::fs::write(&path, "port = 1\n").unwrap();

    let provider = SettingProvider::new();
    let err = provider.write(&path, "port", serde_json::Value::Null).unwrap_err();
    assert!(matches!(err, ConfigError::Serialize { .. }));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "port = 1\n");
    assert_eq!(provider.read(&path, "port").unwrap(), Some(json!(1)));
}

#[test]
fn test_invalidate_forces_fresh_read() {
    let temp = temp_dir();
    let path = temp.path().join("server.json");
    std::fs::write(&path, r#"{ "motd": "old" }"#).unwrap();

    let provider = SettingProvider::new();
    assert_eq!(provider.read(&path, "motd").unwrap(), Some(json!("old")));

    std::fs::write(&path, r#"{ "motd": "new" }"#).unwrap();
    assert!(provider.invalidate(&path));
    assert!(!provider.invalidate(&path));
    assert!(provider.cached_files().is_empty());

    assert_eq!(provider.read(&path, "motd").unwrap(), Some(json!("new")));
}
