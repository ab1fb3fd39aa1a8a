// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Identifier;
use crate::error::IdError;

/// A `namespace:key` identifier, e.g. `rubrion:lobby`.
///
/// The id is split at the first `:`, so keys may contain further colons.
/// Both parts must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamespacedId {
    full: String,
    split: usize,
}

impl NamespacedId {
    /// Builds an id from its two parts.
    ///
    /// # Errors
    ///
    /// Returns `IdError::InvalidNamespaced` if either part is empty or the
    /// namespace contains a `:`.
    pub fn new(namespace: &str, key: &str) -> Result<Self, IdError> {
        if namespace.contains(':') {
            return Err(IdError::InvalidNamespaced(format!("{namespace}:{key}")));
        }
        Self::parse(format!("{namespace}:{key}"))
    }

    /// Parses `namespace:key`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::InvalidNamespaced` if there is no `:` or either part
    /// is empty.
    pub fn parse(id: impl Into<String>) -> Result<Self, IdError> {
        let full = id.into();
        match full.split_once(':') {
            Some((namespace, key)) if !namespace.is_empty() && !key.is_empty() => {
                let split = namespace.len();
                Ok(Self { full, split })
            }
            _ => Err(IdError::InvalidNamespaced(full)),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.full[..self.split]
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.full[self.split + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl Identifier for NamespacedId {
    type Original = str;

    fn original(&self) -> &str {
        &self.full
    }
}

impl FromStr for NamespacedId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NamespacedId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<NamespacedId> for String {
    fn from(id: NamespacedId) -> Self {
        id.full
    }
}

impl AsRef<str> for NamespacedId {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for NamespacedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}
