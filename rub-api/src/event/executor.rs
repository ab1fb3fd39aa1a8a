// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::bus::HandlerId;
use super::{Event, HandlerPriority, HandlerResult, Monitorable, short_type_name};
use crate::error::EventError;

type Handler<E> = Arc<dyn Fn(&mut E) -> HandlerResult + Send + Sync>;

struct Registered<E> {
    id: HandlerId,
    handler: Handler<E>,
}

/// Handlers of one event type, grouped by priority.
pub struct EventExecutor<E> {
    handlers: RwLock<BTreeMap<HandlerPriority, Vec<Registered<E>>>>,
}

impl<E: Event> EventExecutor<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(BTreeMap::new()),
        }
    }

    /// Adds a handler at a non-monitor level.
    ///
    /// # Errors
    ///
    /// Returns `EventError::NotMonitorable` for [`HandlerPriority::Monitor`];
    /// monitor handlers go through [`EventExecutor::register_monitor`].
    pub fn register<F>(
        &self,
        id: HandlerId,
        priority: HandlerPriority,
        handler: F,
    ) -> Result<(), EventError>
    where
        F: Fn(&mut E) -> HandlerResult + Send + Sync + 'static,
    {
        if priority.is_monitor() {
            return Err(EventError::NotMonitorable {
                event: short_type_name::<E>(),
            });
        }
        self.insert(id, priority, Arc::new(handler));
        Ok(())
    }

    /// Removes a handler. Returns whether it was registered here.
    pub fn remove(&self, id: HandlerId) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut removed = false;
        for list in handlers.values_mut() {
            let before = list.len();
            list.retain(|r| r.id != id);
            removed |= list.len() != before;
        }
        handlers.retain(|_, list| !list.is_empty());
        removed
    }

    /// Number of registered handlers across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every handler, lowest priority first.
    ///
    /// The handler list is snapshotted before dispatch, so handlers may
    /// register or remove handlers without affecting the current run.
    ///
    /// # Errors
    ///
    /// Returns `EventError::HandlerFailed` for the first failing handler;
    /// later handlers are not run.
    pub fn fire(&self, event: &mut E) -> Result<(), EventError> {
        let snapshot: Vec<(HandlerPriority, Handler<E>)> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .flat_map(|(priority, list)| {
                list.iter()
                    .map(move |r| (*priority, Arc::clone(&r.handler)))
            })
            .collect();

        for (priority, handler) in snapshot {
            handler(event).map_err(|source| EventError::HandlerFailed {
                event: short_type_name::<E>(),
                priority,
                source,
            })?;
        }
        Ok(())
    }

    fn insert(&self, id: HandlerId, priority: HandlerPriority, handler: Handler<E>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(priority)
            .or_default()
            .push(Registered { id, handler });
    }
}

impl<E: Monitorable> EventExecutor<E> {
    /// Adds a monitor-level handler. It receives a copy of the event.
    pub fn register_monitor<F>(&self, id: HandlerId, handler: F)
    where
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        let observe = move |event: &mut E| handler(&event.copy());
        self.insert(id, HandlerPriority::Monitor, Arc::new(observe));
    }
}

impl<E: Event> Default for EventExecutor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> std::fmt::Debug for EventExecutor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventExecutor")
            .field("event", &short_type_name::<E>())
            .field("handlers", &self.len())
            .finish()
    }
}
