// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task manager for orchestrating task execution.
//!
//! ```text
//! TaskManager::new(config)
//!   .with_events(bus)  .with_dry_run()
//!   .add(task)
//!   .run_all().await
//!       per task: cancelled? --> fire TaskEvent --> canceled? skip : run
//! ```

use std::sync::Arc;

use crate::error::{Result, TaskError};
use anyhow::Context;
use rub_api::event::{Cancelable, EventBus};
use tokio_util::sync::CancellationToken;

use crate::config::Config;

use super::{Task, TaskContext, TaskEvent, Taskable};

/// Manager for orchestrating task execution.
///
/// Tasks are executed sequentially in the order they were added.
pub struct TaskManager {
    tasks: Vec<Task>,
    cancel_token: CancellationToken,
    config: Arc<Config>,
    events: Arc<EventBus>,
    dry_run: bool,
}

impl TaskManager {
    /// Creates a new `TaskManager` with the given configuration.
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            tasks: Vec::new(),
            cancel_token: CancellationToken::new(),
            config,
            events: Arc::new(EventBus::new()),
            dry_run: false,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fires task events on `events` instead of a private bus.
    #[must_use]
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Adds a task to be executed.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Adds several tasks, keeping their order.
    pub fn add_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks.extend(tasks);
    }

    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Returns the cancellation token for sharing with signal handlers.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    #[must_use]
    pub const fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Triggers cancellation for all tasks.
    ///
    /// The running task finishes; no further task starts.
    pub fn interrupt_all(&self) {
        tracing::info!("Interrupting all tasks");
        self.cancel_token.cancel();
    }

    fn create_context(&self) -> TaskContext {
        TaskContext::new(Arc::clone(&self.config), self.cancel_token.clone())
            .with_dry_run(self.dry_run)
            .with_events(Arc::clone(&self.events))
    }

    /// Runs all tasks sequentially.
    ///
    /// Before each task a [`TaskEvent`] is fired; if a handler cancels it the
    /// task is skipped. Returns the names of the tasks that ran.
    ///
    /// # Errors
    ///
    /// Returns an error if cancellation is requested, an event handler fails,
    /// or any task fails.
    pub async fn run_all(&self) -> Result<Vec<String>> {
        if self.tasks.is_empty() {
            tracing::debug!("No tasks to run");
            return Ok(Vec::new());
        }

        tracing::info!(task_count = self.tasks.len(), dry_run = self.dry_run, "Starting task execution");

        let ctx = self.create_context();
        let mut ran = Vec::with_capacity(self.tasks.len());

        for (i, task) in self.tasks.iter().enumerate() {
            let name = task.name();

            if self.is_cancelled() {
                return Err(TaskError::Interrupted(name.to_string()).into());
            }

            let mut event = TaskEvent::new(name);
            self.events
                .fire(&mut event)
                .map_err(|source| TaskError::Event {
                    name: name.to_string(),
                    source,
                })?;
            if event.is_canceled() {
                tracing::info!(task = %name, "Task canceled by event handler, skipping");
                continue;
            }

            tracing::info!(
                task = %name,
                index = i + 1,
                total = self.tasks.len(),
                "Running task"
            );

            task.execute(&ctx)
                .await
                .with_context(|| format!("Task '{name}' failed"))?;
            ran.push(name.to_string());
        }

        tracing::info!(completed = ran.len(), "All tasks completed successfully");
        Ok(ran)
    }
}
