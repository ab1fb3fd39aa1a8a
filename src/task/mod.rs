// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! [tasks.*] config --> TaskRegistry (names, globs)
//!                          |
//!                          v
//! TaskManager ----> Task enum ----> TaskContext (config, cancel token,
//!      |                |                        dry run, event bus)
//!      |                v
//!      |            CopyTask
//!      v
//!  EventBus: TaskEvent before each task (cancel = skip)
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TaskManager`](manager::TaskManager) | Runs tasks in order with cancellation |
//! | [`TaskRegistry`](registry::TaskRegistry) | Resolves names and glob patterns |
//! | [`Task`] | Enum dispatching to concrete task implementations |
//! | [`Taskable`] | Trait defining the common task interface |
//! | [`TaskContext`] | Execution context shared by all tasks of a run |
//! | [`TaskEvent`] | Cancelable event fired before a task runs |
//!
//! ## Adding a New Task Kind
//!
//! 1. Add a variant to [`TaskKind`]
//! 2. Create the task struct in `tasks/` and implement `Taskable`
//! 3. Add a variant to the `Task` enum and to `impl_taskable_for_task!`
//! 4. Map the kind in [`Task::from_spec`]

pub mod event;
pub mod manager;
pub mod registry;
pub mod tasks;

use futures_util::future::BoxFuture;
use rub_api::event::EventBus;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::config::types::{TaskKind, TaskSpec};
use crate::error::{Result, RubResult, TaskError};

pub use event::TaskEvent;
use tasks::copy::CopyTask;

/// Trait for task implementations.
///
/// Methods return `BoxFuture` so the `Task` enum can dispatch without
/// `async fn` in traits.
///
/// # Example
///
/// ```ignore
/// impl Taskable for MyTask {
///     fn name(&self) -> &str { &self.name }
///     fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
///         Box::pin(self.execute(ctx))
///     }
/// }
/// ```
pub trait Taskable {
    /// Returns the task name.
    fn name(&self) -> &str;

    /// Returns whether this task is enabled for the given context.
    fn enabled(&self, _ctx: &TaskContext) -> bool {
        true
    }

    /// Executes the task.
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to tasks during execution.
#[derive(Debug, Clone)]
pub struct TaskContext {
    config: Arc<Config>,
    cancel_token: CancellationToken,
    dry_run: bool,
    events: Arc<EventBus>,
}

impl TaskContext {
    /// Creates a new `TaskContext` with its own event bus.
    #[must_use]
    pub fn new(config: Arc<Config>, cancel_token: CancellationToken) -> Self {
        Self {
            config,
            cancel_token,
            dry_run: false,
            events: Arc::new(EventBus::new()),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The bus task events are fired on.
    #[must_use]
    pub const fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Shares an existing event bus.
    #[must_use]
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Checks if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// A configured task.
#[derive(Debug, Clone)]
pub enum Task {
    /// Recursive directory copy.
    Copy(CopyTask),
}

impl Task {
    /// Builds the task declared by `spec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task paths cannot be expanded or a filter
    /// pattern is invalid.
    pub fn from_spec(name: &str, spec: &TaskSpec, paths: &PathsConfig) -> RubResult<Self> {
        match spec.kind {
            TaskKind::Copy => Ok(Self::Copy(CopyTask::from_spec(name, spec, paths)?)),
        }
    }

    /// Builds the named tasks from the configuration, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` for names without a `[tasks.<name>]`
    /// table, or any error from [`Task::from_spec`].
    pub fn from_config<S: AsRef<str>>(config: &Config, names: &[S]) -> RubResult<Vec<Self>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let (key, spec) = config
                    .task_spec(name)
                    .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
                Self::from_spec(key, spec, &config.paths)
            })
            .collect()
    }

    /// Runs the task unless it is disabled.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Interrupted` if cancellation was requested before
    /// the task started, or the task's own error.
    pub async fn execute(&self, ctx: &TaskContext) -> Result<()> {
        if !self.enabled(ctx) {
            tracing::debug!(task = %self.name(), "Skipping disabled task");
            return Ok(());
        }

        if ctx.is_cancelled() {
            return Err(TaskError::Interrupted(self.name().to_string()).into());
        }

        Taskable::run(self, ctx).await
    }
}

/// Macro to implement Taskable for Task enum by delegating to inner types.
macro_rules! impl_taskable_for_task {
    ($($variant:ident),+ $(,)?) => {
        impl Taskable for Task {
            fn name(&self) -> &str {
                match self {
                    $(Task::$variant(t) => Taskable::name(t),)+
                }
            }

            fn enabled(&self, ctx: &TaskContext) -> bool {
                match self {
                    $(Task::$variant(t) => Taskable::enabled(t, ctx),)+
                }
            }

            fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::run(t, ctx),)+
                }
            }
        }
    };
}

impl_taskable_for_task!(Copy);

#[cfg(test)]
mod tests;
