// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed, prioritized event dispatch.
//!
//! # Dispatch Order
//!
//! ```text
//! bus.fire(&mut event)
//!      |
//!      v
//! EventExecutor<E>
//!   EARLY   --> handlers(&mut E)   registration order
//!   NORMAL  --> handlers(&mut E)
//!   LATE    --> handlers(&mut E)
//!   MONITOR --> handlers(&E copy)  original never touched
//! ```
//!
//! Every handler runs, canceled or not; handlers check
//! [`Cancelable::is_canceled`] themselves. The first handler error stops
//! dispatch and is returned to the caller.
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Event`] | Base trait: timestamp, age, cancel access |
//! | [`Cancelable`] | Events that carry a canceled flag |
//! | [`Monitorable`] | Events that can be copied for monitor handlers |
//! | [`HandlerPriority`] | `Early < Normal < Late < Monitor` |
//! | [`EventBus`] | Type-keyed executor registry |
//! | [`HandlerList`] | Groups related handlers for one-call registration |

pub mod bus;
pub mod executor;

use std::any::Any;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub use bus::{EventBus, HandlerId, HandlerList};
pub use executor::EventExecutor;

/// Result returned by event handlers.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// An event that can be fired on an [`EventBus`].
pub trait Event: Any + Send + Sync {
    /// When the event was created.
    fn timestamp(&self) -> SystemTime;

    /// Time elapsed since [`Event::timestamp`], zero for future timestamps.
    fn age(&self) -> Duration {
        SystemTime::now()
            .duration_since(self.timestamp())
            .unwrap_or_default()
    }

    /// Short diagnostic label, `TypeName@<unix millis>`.
    fn debug(&self) -> String {
        let millis = self
            .timestamp()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        format!("{}@{millis}", short_type_name::<Self>())
    }

    /// Cancel access for cancelable events.
    fn as_cancelable(&self) -> Option<&dyn Cancelable> {
        None
    }

    fn is_cancelable(&self) -> bool {
        self.as_cancelable().is_some()
    }
}

/// An event whose processing can be canceled by a handler.
pub trait Cancelable {
    fn set_canceled(&mut self, canceled: bool);

    fn is_canceled(&self) -> bool;

    fn cancel(&mut self) {
        self.set_canceled(true);
    }
}

/// An event that monitor-level handlers may observe through a copy.
pub trait Monitorable: Event + Clone {
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// Handler execution level, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HandlerPriority {
    Early,
    #[default]
    Normal,
    Late,
    /// Observe-only level; handlers receive a copy of the event.
    Monitor,
}

impl HandlerPriority {
    /// All levels in dispatch order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Early, Self::Normal, Self::Late, Self::Monitor]
    }

    #[must_use]
    pub const fn is_monitor(self) -> bool {
        matches!(self, Self::Monitor)
    }
}

impl std::fmt::Display for HandlerPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "EARLY"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Late => write!(f, "LATE"),
            Self::Monitor => write!(f, "MONITOR"),
        }
    }
}

/// Last path segment of a type name, generics stripped.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
