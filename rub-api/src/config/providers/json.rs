// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::Value;

use crate::config::{ConfigData, ConfigFormat, ConfigReader, into_data};
use crate::error::ConfigError;

/// JSON configuration reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl ConfigReader for JsonReader {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }

    fn parse(&self, content: &str) -> Result<ConfigData, String> {
        if content.trim().is_empty() {
            return Ok(ConfigData::new());
        }
        serde_json::from_str::<Value>(content)
            .map(into_data)
            .map_err(|e| e.to_string())
    }

    fn render(&self, data: &ConfigData) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(data).map_err(|e| ConfigError::Serialize {
            format: ConfigFormat::Json,
            message: e.to_string(),
        })
    }
}
