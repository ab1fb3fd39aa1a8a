// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for rub.

use std::sync::Arc;

use rub_api::event::{Cancelable, EventBus};

use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::task::manager::TaskManager;
use crate::task::registry::TaskRegistry;
use crate::task::{Task, TaskEvent};

/// Main handler for run command.
///
/// Ctrl+C stops the run before the next task starts.
///
/// # Errors
///
/// Returns an error if task resolution fails or a task fails.
pub async fn run_tasks_command(args: &RunArgs, config: &Config, events: Arc<EventBus>) -> Result<()> {
    let config = Arc::new(config.clone());
    let manager = build_manager(args, &config, events)?;

    let cancel_token = manager.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting tasks...");
            cancel_token.cancel();
        }
    });

    let ran = manager.run_all().await?;
    tracing::info!(tasks = ?ran, "Run completed successfully");
    Ok(())
}

/// Resolves the requested tasks and queues them on a new manager.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or a task cannot be built from
/// its configuration.
pub fn build_manager(args: &RunArgs, config: &Arc<Config>, events: Arc<EventBus>) -> Result<TaskManager> {
    let registry = TaskRegistry::from_config(config);
    let names = registry.resolve(&args.tasks)?;

    if names.is_empty() {
        tracing::warn!(patterns = ?args.tasks, "No tasks resolved from patterns");
    } else {
        tracing::info!(tasks = ?names, "Resolved tasks to run");
    }

    events.monitor(|event: &TaskEvent| {
        tracing::debug!(task = %event.task(), canceled = event.is_canceled(), "Task event");
        Ok(())
    });

    let mut manager = TaskManager::new(Arc::clone(config))
        .with_dry_run(config.global.dry)
        .with_events(events);
    manager.add_all(Task::from_config(config, &names)?);
    Ok(manager)
}

