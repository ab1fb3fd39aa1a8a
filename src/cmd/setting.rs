// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings file commands for rub.
//!
//! ```text
//! setting get  --> SettingProvider::read   --> JSON on stdout
//! setting set  --> SettingProvider::write  (format from extension)
//! convert      --> reader(input).load --> reader(output).save
//! ```

use std::path::Path;

use anyhow::Context;
use rub_api::config::ConfigFormat;
use rub_api::config::setting::SettingProvider;
use rub_api::error::ConfigError;
use serde_json::Value;

use crate::cli::setting::{ConvertArgs, SettingAction, SettingArgs};
use crate::error::Result;

/// Main handler for setting command.
///
/// # Errors
///
/// Returns an error if the file format is unsupported or the file cannot be
/// read or written.
pub fn run_setting_command(args: &SettingArgs, provider: &SettingProvider) -> Result<()> {
    match &args.action {
        SettingAction::Get { file, key } => {
            match provider.read(file, key)? {
                Some(value) => println!("{value}"),
                None => println!("'{key}' is not set in {}", file.display()),
            }
            Ok(())
        }
        SettingAction::Set { file, key, value } => {
            let value = parse_value(value);
            tracing::info!(file = %file.display(), key = %key, value = %value, "Writing setting");
            provider.write(file, key, value)?;
            Ok(())
        }
    }
}

/// Parses a command-line value as JSON, falling back to a plain string.
#[must_use]
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Main handler for convert command.
///
/// # Errors
///
/// Returns an error if either extension is unsupported, the input cannot be
/// loaded, or the output cannot be written.
pub fn run_convert_command(args: &ConvertArgs) -> Result<()> {
    convert_file(&args.input, &args.output)?;
    println!("{} -> {}", args.input.display(), args.output.display());
    Ok(())
}

/// Re-encodes `input` in the format of `output`'s extension.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedFormat` for unknown extensions, or the
/// reader/writer error.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let from = format_of(input)?;
    let to = format_of(output)?;

    let data = from
        .reader()
        .load(input)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    to.reader().save(output, &data)?;

    tracing::info!(from = %from, to = %to, keys = data.len(), "Converted settings file");
    Ok(())
}

fn format_of(path: &Path) -> std::result::Result<ConfigFormat, ConfigError> {
    ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        extension: rub_api::config::extension_of(path),
    })
}
