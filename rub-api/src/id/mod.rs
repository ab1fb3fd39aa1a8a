// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed identifiers.
//!
//! | Type | Original | Form |
//! |------|----------|------|
//! | [`IntegerId`] | `i32` | `42` |
//! | [`LongId`] | `i64` | `9000000000` |
//! | [`StringId`] | `str` | `lobby` |
//! | [`NamespacedId`] | `str` | `rubrion:lobby` |
//! | [`UniqueId`] | `Uuid` | `67e55044-10b1-426f-9247-bb680e5fe0c8` |
//!
//! Identifiers compare through their original value; [`Identifiable`] lets
//! any type that owns an identifier be matched against ids, originals or
//! other identifiables.

mod namespaced;
mod numeric;
mod string;
mod unique;

use std::cmp::Ordering;

pub use namespaced::NamespacedId;
pub use numeric::{IntegerId, LongId};
pub use string::StringId;
pub use unique::UniqueId;

/// A value that identifies something through an ordered original value.
pub trait Identifier {
    /// The wrapped value.
    type Original: ?Sized + Ord;

    fn original(&self) -> &Self::Original;

    /// Orders this identifier against a raw original value.
    fn compare_original(&self, other: &Self::Original) -> Ordering {
        self.original().cmp(other)
    }

    /// Whether both identifiers wrap equal originals.
    fn same_as(&self, other: &Self) -> bool {
        self.compare_original(other.original()).is_eq()
    }
}

/// Something that carries an [`Identifier`].
pub trait Identifiable {
    type Id: Identifier;

    fn identifier(&self) -> &Self::Id;

    fn original(&self) -> &<Self::Id as Identifier>::Original {
        self.identifier().original()
    }

    /// Whether another identifiable carries the same identifier.
    fn identify<T>(&self, other: &T) -> bool
    where
        T: Identifiable<Id = Self::Id> + ?Sized,
    {
        self.identifier().same_as(other.identifier())
    }

    fn identify_id(&self, id: &Self::Id) -> bool {
        self.identifier().same_as(id)
    }

    fn identify_original(&self, original: &<Self::Id as Identifier>::Original) -> bool {
        self.identifier().compare_original(original).is_eq()
    }
}
