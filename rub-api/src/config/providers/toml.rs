// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Number, Value};

use crate::config::{ConfigData, ConfigFormat, ConfigReader};
use crate::error::ConfigError;

/// TOML configuration reader.
///
/// TOML has no null, so rendering a document that contains one fails.
/// Datetimes are loaded as their RFC 3339 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlReader;

impl ConfigReader for TomlReader {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Toml
    }

    fn parse(&self, content: &str) -> Result<ConfigData, String> {
        let table = ::toml::from_str::<::toml::Table>(content).map_err(|e| e.to_string())?;
        Ok(table
            .into_iter()
            .map(|(key, value)| (key, to_json(value)))
            .collect())
    }

    fn render(&self, data: &ConfigData) -> Result<String, ConfigError> {
        ::toml::to_string(data).map_err(|e| ConfigError::Serialize {
            format: ConfigFormat::Toml,
            message: e.to_string(),
        })
    }
}

fn to_json(value: ::toml::Value) -> Value {
    use ::toml::Value as Toml;

    match value {
        Toml::String(s) => Value::String(s),
        Toml::Integer(i) => Value::from(i),
        // NaN and infinities have no JSON form
        Toml::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        Toml::Boolean(b) => Value::Bool(b),
        Toml::Datetime(dt) => Value::String(dt.to_string()),
        Toml::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        Toml::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, to_json(value)))
                .collect(),
        ),
    }
}
