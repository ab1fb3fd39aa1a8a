// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event bus keyed by event type.
//!
//! ```text
//! EventBus
//!   executors: TypeId --> Arc<EventExecutor<E>>
//!   next_id:   AtomicU64 --> HandlerId
//!
//! register::<E>(priority, f)   EARLY | NORMAL | LATE
//! monitor::<E>(f)              MONITOR, E: Monitorable
//! register_list(list)          HandlerList::register
//! unregister(id)               any type
//! fire(&mut E)                 no executor --> no-op
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::{Event, EventExecutor, HandlerPriority, HandlerResult, Monitorable, short_type_name};
use crate::error::EventError;

/// Identifies one registered handler on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A group of handlers registered together.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::SystemTime;
///
/// use rub_api::error::EventError;
/// use rub_api::event::{Event, EventBus, HandlerId, HandlerList, HandlerPriority};
///
/// struct Joined(SystemTime);
///
/// impl Event for Joined {
///     fn timestamp(&self) -> SystemTime {
///         self.0
///     }
/// }
///
/// #[derive(Default)]
/// struct JoinCounter(AtomicUsize);
///
/// impl HandlerList for JoinCounter {
///     fn register(self: Arc<Self>, bus: &EventBus) -> Result<Vec<HandlerId>, EventError> {
///         let id = bus.register::<Joined, _>(HandlerPriority::Normal, move |_| {
///             self.0.fetch_add(1, Ordering::Relaxed);
///             Ok(())
///         })?;
///         Ok(vec![id])
///     }
/// }
///
/// let bus = EventBus::new();
/// let counter = Arc::new(JoinCounter::default());
/// bus.register_list(Arc::clone(&counter))?;
/// bus.fire(&mut Joined(SystemTime::now()))?;
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// # Ok::<(), EventError>(())
/// ```
pub trait HandlerList: Send + Sync + 'static {
    /// Registers every handler of this list on the bus.
    ///
    /// # Errors
    ///
    /// Returns the bus error of the first handler that cannot be registered.
    fn register(self: Arc<Self>, bus: &EventBus) -> Result<Vec<HandlerId>, EventError>;
}

trait ErasedExecutor: Send + Sync {
    fn remove(&self, id: HandlerId) -> bool;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<E: Event> ErasedExecutor for EventExecutor<E> {
    fn remove(&self, id: HandlerId) -> bool {
        Self::remove(self, id)
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Dispatches events to the handlers registered for their type.
pub struct EventBus {
    executors: RwLock<HashMap<TypeId, Arc<dyn ErasedExecutor>>>,
    next_id: AtomicU64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            executors: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Registers a handler for events of type `E`.
    ///
    /// # Errors
    ///
    /// Returns `EventError::NotMonitorable` for [`HandlerPriority::Monitor`];
    /// use [`EventBus::monitor`] for observe-only handlers.
    pub fn register<E, F>(&self, priority: HandlerPriority, handler: F) -> Result<HandlerId, EventError>
    where
        E: Event,
        F: Fn(&mut E) -> HandlerResult + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.executor::<E>().register(id, priority, handler)?;
        tracing::trace!(event = short_type_name::<E>(), %priority, handler = %id, "Registered handler");
        Ok(id)
    }

    /// Registers a monitor-level handler that observes a copy of each event.
    pub fn monitor<E, F>(&self, handler: F) -> HandlerId
    where
        E: Monitorable,
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.executor::<E>().register_monitor(id, handler);
        tracing::trace!(event = short_type_name::<E>(), priority = %HandlerPriority::Monitor, handler = %id, "Registered handler");
        id
    }

    /// Registers all handlers of a [`HandlerList`].
    ///
    /// # Errors
    ///
    /// Returns `EventError::Registration` naming the list if any handler fails
    /// to register.
    pub fn register_list<L: HandlerList>(&self, list: Arc<L>) -> Result<Vec<HandlerId>, EventError> {
        list.register(self).map_err(|e| {
            EventError::Registration(format!("{}: {e}", short_type_name::<L>()))
        })
    }

    /// Removes a handler from whichever event type it was registered for.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let executors: Vec<_> = self
            .executors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        executors.iter().any(|executor| executor.remove(id))
    }

    /// Fires an event through every handler registered for its type.
    ///
    /// Events without registered handlers are ignored.
    ///
    /// # Errors
    ///
    /// Returns `EventError::HandlerFailed` for the first failing handler.
    pub fn fire<E: Event>(&self, event: &mut E) -> Result<(), EventError> {
        match self.existing_executor::<E>() {
            Some(executor) => executor.fire(event),
            None => Ok(()),
        }
    }

    /// Number of handlers registered for `E`.
    #[must_use]
    pub fn handler_count<E: Event>(&self) -> usize {
        self.existing_executor::<E>().map_or(0, |e| e.len())
    }

    fn next_id(&self) -> HandlerId {
        HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn existing_executor<E: Event>(&self) -> Option<Arc<EventExecutor<E>>> {
        let erased = self
            .executors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()?;
        erased.into_any().downcast::<EventExecutor<E>>().ok()
    }

    fn executor<E: Event>(&self) -> Arc<EventExecutor<E>> {
        if let Some(executor) = self.existing_executor::<E>() {
            return executor;
        }

        let mut executors = self
            .executors
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let erased = executors
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Arc::new(EventExecutor::<E>::new()))
            .clone();
        drop(executors);

        erased
            .into_any()
            .downcast::<EventExecutor<E>>()
            .unwrap_or_else(|_| unreachable!("executor map is keyed by event TypeId"))
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let types = self
            .executors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("EventBus")
            .field("event_types", &types)
            .finish_non_exhaustive()
    }
}
