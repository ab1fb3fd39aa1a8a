// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed views over [`ConfigData`].
//!
//! Any `Serialize + DeserializeOwned + Default` type is an [`Item`]. Keys are
//! the serde field names, so `#[serde(rename = "max-players")]` selects the key.
//!
//! ```text
//! T::default() --> map --> overwrite present keys --> T
//!                              (lenient coercion)
//! ```
//!
//! # Example
//!
//! ```
//! use rub_api::config::{ConfigData, item};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Server {
//!     #[serde(rename = "max-players")]
//!     max_players: u32,
//!     motd: String,
//! }
//!
//! let mut data = ConfigData::new();
//! data.insert("max-players".into(), "20".into());
//!
//! let server: Server = item::load(&data)?;
//! assert_eq!(server.max_players, 20);
//! assert_eq!(server.motd, "");
//! # Ok::<(), rub_api::error::ConfigError>(())
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use super::ConfigData;
use crate::error::ConfigError;

/// A type that can be mapped from and to configuration data.
pub trait Item: Serialize + DeserializeOwned + Default {}

impl<T: Serialize + DeserializeOwned + Default> Item for T {}

/// Builds an item from configuration data.
///
/// Fields whose key is missing or null keep their default value. Unknown keys
/// are ignored. Scalars are coerced to the type of the default value where a
/// lossless or conventional conversion exists.
///
/// # Errors
///
/// Returns `ConfigError::Mapping` if the item does not serialize to a map or
/// the merged data does not deserialize into `T`.
pub fn load<T: Item>(data: &ConfigData) -> Result<T, ConfigError> {
    let mut base = match serde_json::to_value(T::default()) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(mapping_error::<T>("item does not serialize to a map")),
        Err(e) => return Err(mapping_error::<T>(e)),
    };

    for (key, slot) in &mut base {
        if let Some(value) = data.get(key)
            && !value.is_null()
        {
            *slot = coerce(slot, value);
        }
    }

    serde_json::from_value(Value::Object(base)).map_err(mapping_error::<T>)
}

/// Converts an item back into configuration data.
///
/// # Errors
///
/// Returns `ConfigError::Mapping` if the item does not serialize to a map.
pub fn unload<T: Serialize>(item: &T) -> Result<ConfigData, ConfigError> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(mapping_error::<T>("item does not serialize to a map")),
        Err(e) => Err(mapping_error::<T>(e)),
    }
}

fn mapping_error<T>(message: impl std::fmt::Display) -> ConfigError {
    ConfigError::Mapping {
        type_name: std::any::type_name::<T>().to_string(),
        message: message.to_string(),
    }
}

/// Coerces `value` towards the JSON type of `template`.
fn coerce(template: &Value, value: &Value) -> Value {
    match (template, value) {
        (Value::Number(t), Value::Number(n)) if t.is_f64() && !n.is_f64() => {
            float(n.as_f64()).unwrap_or_else(|| value.clone())
        }
        (Value::Number(t), Value::Number(n)) if !t.is_f64() && n.is_f64() => {
            integer(n.as_f64()).unwrap_or_else(|| value.clone())
        }
        (Value::Number(t), Value::String(s)) => {
            let parsed = s.trim().parse::<f64>().ok();
            let coerced = if t.is_f64() {
                float(parsed)
            } else {
                s.trim()
                    .parse::<i64>()
                    .map(Value::from)
                    .ok()
                    .or_else(|| integer(parsed))
            };
            coerced.unwrap_or_else(|| value.clone())
        }
        (Value::Bool(_), Value::String(s)) => Value::Bool(s.trim().eq_ignore_ascii_case("true")),
        (Value::Bool(_), Value::Number(n)) => Value::Bool(n.as_f64().is_some_and(|f| f != 0.0)),
        (Value::String(_), Value::Number(n)) => Value::String(n.to_string()),
        (Value::String(_), Value::Bool(b)) => Value::String(b.to_string()),
        _ => value.clone(),
    }
}

fn float(value: Option<f64>) -> Option<Value> {
    value.and_then(Number::from_f64).map(Value::Number)
}

#[allow(clippy::cast_possible_truncation)]
fn integer(value: Option<f64>) -> Option<Value> {
    value
        .filter(|f| f.is_finite())
        .map(|f| Value::from(f.trunc() as i64))
}
