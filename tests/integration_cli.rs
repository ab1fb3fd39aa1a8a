// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and the file-based commands.

use clap::Parser;
use rub_common::api::config::setting::SettingProvider;
use rub_common::cli::run::ListArgs;
use rub_common::cli::setting::{SettingAction, SettingArgs};
use rub_common::cli::{Cli, Command};
use rub_common::cmd::list::list_tasks;
use rub_common::cmd::setting::{convert_file, parse_value, run_setting_command};
use rub_common::config::Config;
use serde_json::json;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["rub"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["rub", "build"]).is_err());
}

#[test]
fn cli_list_patterns() {
    let cli = Cli::try_parse_from(["rub", "list", "-v", "export*"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.verbose);
    assert_eq!(args.patterns, ["export*"]);
}

// =============================================================================
// list
// =============================================================================

#[test]
fn list_default_tasks_verbose() {
    let args = ListArgs {
        verbose: true,
        patterns: Vec::new(),
    };
    let lines = list_tasks(&args, &Config::default()).unwrap();

    insta::assert_snapshot!(
        lines.join("\n"),
        @"exportResources [copy] src/main/resources -> ${buildDir}/exportedResources"
    );
}

#[test]
fn list_disabled_task() {
    let config = Config::parse("[tasks.exportResources]\nenabled = false").unwrap();
    let args = ListArgs {
        verbose: true,
        patterns: vec!["export*".to_string()],
    };
    let lines = list_tasks(&args, &config).unwrap();

    assert!(lines[0].ends_with("(disabled)"));
}

// =============================================================================
// setting / convert
// =============================================================================

#[test]
fn parse_value_falls_back_to_string() {
    assert_eq!(parse_value("25565"), json!(25565));
    assert_eq!(parse_value("true"), json!(true));
    assert_eq!(parse_value(r#"{"a":1}"#), json!({"a": 1}));
    assert_eq!(parse_value("lobby"), json!("lobby"));
}

#[test]
fn setting_set_then_get() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("server.json");
    let provider = SettingProvider::new();

    let set = SettingArgs {
        action: SettingAction::Set {
            file: file.clone(),
            key: "port".to_string(),
            value: "25565".to_string(),
        },
    };
    run_setting_command(&set, &provider).unwrap();

    assert_eq!(provider.read(&file, "port").unwrap(), Some(json!(25565)));
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(written, json!({"port": 25565}));
}

#[test]
fn setting_unsupported_extension() {
    let temp = tempfile::tempdir().unwrap();
    let get = SettingArgs {
        action: SettingAction::Get {
            file: temp.path().join("server.ini"),
            key: "port".to_string(),
        },
    };

    let err = run_setting_command(&get, &SettingProvider::new()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no provider for file type: 'ini'");
}

#[test]
fn convert_json_to_yaml_and_toml() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("server.json");
    std::fs::write(&input, r#"{"name": "lobby", "port": 25565}"#).unwrap();

    let yaml = temp.path().join("server.yml");
    convert_file(&input, &yaml).unwrap();
    let provider = SettingProvider::new();
    assert_eq!(provider.read(&yaml, "name").unwrap(), Some(json!("lobby")));

    let toml = temp.path().join("server.toml");
    convert_file(&yaml, &toml).unwrap();
    assert_eq!(provider.read(&toml, "port").unwrap(), Some(json!(25565)));
}

#[test]
fn convert_unknown_output_format() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("server.json");
    std::fs::write(&input, "{}").unwrap();

    assert!(convert_file(&input, &temp.path().join("server.xml")).is_err());
}
