// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Identifier;
use crate::error::IdError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            #[must_use]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            pub const fn as_i64(self) -> i64 {
                self.0 as i64
            }

            #[must_use]
            #[allow(clippy::cast_precision_loss)]
            pub const fn as_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl Identifier for $name {
            type Original = $inner;

            fn original(&self) -> &$inner {
                &self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|source| IdError::InvalidNumber {
                        value: s.to_string(),
                        source,
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id! {
    /// 32-bit numeric identifier.
    IntegerId(i32)
}

numeric_id! {
    /// 64-bit numeric identifier.
    LongId(i64)
}

impl IntegerId {
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl LongId {
    /// Narrows to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns `IdError::OutOfRange` if the value does not fit into an `i32`.
    pub fn as_i32(self) -> Result<i32, IdError> {
        i32::try_from(self.0).map_err(|_| IdError::OutOfRange(self.0))
    }
}

impl From<IntegerId> for LongId {
    fn from(id: IntegerId) -> Self {
        Self(id.as_i64())
    }
}
