// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use rub_api::event::{Cancelable, Event, Monitorable};
use std::time::SystemTime;

/// Fired on the run's event bus right before a task starts.
///
/// Canceling the event skips the task; the run continues with the next one.
#[derive(Debug, Clone)]
pub struct TaskEvent {
    task: String,
    at: SystemTime,
    canceled: bool,
}

impl TaskEvent {
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            at: SystemTime::now(),
            canceled: false,
        }
    }

    /// Name of the task about to run.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }
}

impl Event for TaskEvent {
    fn timestamp(&self) -> SystemTime {
        self.at
    }

    fn as_cancelable(&self) -> Option<&dyn Cancelable> {
        Some(self)
    }
}

impl Cancelable for TaskEvent {
    fn set_canceled(&mut self, canceled: bool) {
        self.canceled = canceled;
    }

    fn is_canceled(&self) -> bool {
        self.canceled
    }
}

impl Monitorable for TaskEvent {}
