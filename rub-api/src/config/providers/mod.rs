// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in [`ConfigReader`](super::ConfigReader) implementations.
//!
//! ```text
//! JsonReader  serde_json, pretty output
//! YamlReader  serde_yaml
//! TomlReader  toml, datetimes as strings, no nulls
//! ```

pub mod json;
pub mod toml;
pub mod yaml;

pub use self::json::JsonReader;
pub use self::toml::TomlReader;
pub use self::yaml::YamlReader;
