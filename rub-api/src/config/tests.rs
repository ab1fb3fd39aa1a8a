// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use serde_json::json;

use super::{ConfigData, ConfigFormat, ConfigReader, extension_of};
use crate::error::ConfigError;

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn sample() -> ConfigData {
    let mut data = ConfigData::new();
    data.insert("name".into(), json!("lobby"));
    data.insert("port".into(), json!(25565));
    data.insert("debug".into(), json!(false));
    data.insert("motd".into(), json!({ "lines": ["a", "b"] }));
    data
}

#[test]
fn test_format_from_extension() {
    let formats: Vec<_> = ["json", "YML", "yaml", "Toml", "ini", ""]
        .into_iter()
        .map(|ext| (ext, ConfigFormat::from_extension(ext)))
        .collect();
    insta::assert_debug_snapshot!(formats, @r#"
    [
        (
            "json",
            Some(
                Json,
            ),
        ),
        (
            "YML",
            Some(
                Yaml,
            ),
        ),
        (
            "yaml",
            Some(
                Yaml,
            ),
        ),
        (
            "Toml",
            Some(
                Toml,
            ),
        ),
        (
            "ini",
            None,
        ),
        (
            "",
            None,
        ),
    ]
    "#);
}

#[test]
fn test_extension_of_uses_last_dot() {
    assert_eq!(extension_of(Path::new("conf/server.backup.TOML")), "toml");
    assert_eq!(extension_of(Path::new("conf/.json")), "json");
    assert_eq!(extension_of(Path::new("conf/README")), "");
    assert_eq!(
        ConfigFormat::from_path(Path::new("a/b/settings.yaml")),
        Some(ConfigFormat::Yaml)
    );
}

#[test]
fn test_save_then_load_each_format() {
    let temp = temp_dir();

    for format in [ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml] {
        let path = temp.path().join(format!("settings.{}", format.extension()));
        let reader = format.reader();
        assert_eq!(reader.format(), format);

        reader.save(&path, &sample()).unwrap();
        let loaded = reader.load(&path).unwrap();
        assert_eq!(loaded, sample(), "format {format}");
    }
}

#[test]
fn test_json_output_is_pretty() {
    let rendered = ConfigFormat::Json.reader().render(&sample()).unwrap();
    assert!(rendered.contains("\n  \"name\": \"lobby\""));
}

#[test]
fn test_non_map_documents_load_empty() {
    let cases = [
        (ConfigFormat::Json, "null"),
        (ConfigFormat::Json, "[1, 2]"),
        (ConfigFormat::Json, ""),
        (ConfigFormat::Yaml, "- a\n- b\n"),
        (ConfigFormat::Yaml, "just a string"),
        (ConfigFormat::Yaml, ""),
        (ConfigFormat::Toml, ""),
    ];
    for (format, content) in cases {
        let data = format.reader().parse(content).unwrap();
        assert!(data.is_empty(), "{format} {content:?}");
    }
}

#[test]
fn test_toml_datetime_loads_as_string() {
    let data = ConfigFormat::Toml
        .reader()
        .parse("released = 1979-05-27T07:32:00Z\n")
        .unwrap();
    assert_eq!(data["released"], json!("1979-05-27T07:32:00Z"));
}

#[test]
fn test_toml_rejects_null() {
    let mut data = ConfigData::new();
    data.insert("owner".into(), serde_json::Value::Null);
    let err = ConfigFormat::Toml.reader().render(&data).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Serialize {
            format: ConfigFormat::Toml,
            ..
        }
    ));
}

#[test]
fn test_load_missing_file() {
    let temp = temp_dir();
    let err = ConfigFormat::Json
        .reader()
        .load(&temp.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_invalid_content() {
    let temp = temp_dir();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ \"name\": ").unwrap();

    let err = ConfigFormat::Json.reader().load(&path).unwrap_err();
    match err {
        ConfigError::Parse { format, path: p, .. } => {
            assert_eq!(format, ConfigFormat::Json);
            assert_eq!(p, path);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
