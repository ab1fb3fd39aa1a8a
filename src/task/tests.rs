// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Task, TaskContext, TaskEvent, Taskable};
use crate::config::Config;
use crate::error::{RubError, TaskError};
use rub_api::event::{Cancelable, Event, EventBus, Monitorable};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn test_config() -> Arc<Config> {
    Arc::new(Config::default())
}

#[test]
fn test_task_context_creation() {
    let ctx = TaskContext::new(test_config(), CancellationToken::new());

    assert!(!ctx.is_dry_run());
    assert!(!ctx.is_cancelled());
    assert_eq!(ctx.config().project.name, "rub-common");
}

#[test]
fn test_task_context_shares_bus() {
    let bus = Arc::new(EventBus::new());
    let ctx = TaskContext::new(test_config(), CancellationToken::new())
        .with_dry_run(true)
        .with_events(Arc::clone(&bus));

    assert!(ctx.is_dry_run());
    assert!(Arc::ptr_eq(ctx.events(), &bus));
}

#[test]
fn test_task_context_cancellation() {
    let token = CancellationToken::new();
    let ctx = TaskContext::new(test_config(), token.clone());

    token.cancel();
    assert!(ctx.is_cancelled());
    assert!(ctx.cancel_token().is_cancelled());
}

#[test]
fn test_task_from_config() {
    let config = Config::default();
    let tasks = Task::from_config(&config, &["exportresources"]).unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name(), "exportResources");
    let Task::Copy(copy) = &tasks[0];
    assert!(copy.destination().ends_with("exportedResources"));
}

#[test]
fn test_task_from_config_unknown() {
    let err = Task::from_config(&Config::default(), &["publish"]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"task 'publish' not found");
    assert!(matches!(&err, RubError::Task(task) if matches!(**task, TaskError::NotFound(_))));
}

#[tokio::test]
async fn test_disabled_task_is_skipped() {
    let config = Config::parse("[tasks.exportResources]\nenabled = false\nfrom = \"/nonexistent-file\"").unwrap();
    let tasks = Task::from_config(&config, &["exportResources"]).unwrap();
    let ctx = TaskContext::new(Arc::new(config), CancellationToken::new());

    assert!(!tasks[0].enabled(&ctx));
    tasks[0].execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_execute_cancelled() {
    let config = Config::default();
    let tasks = Task::from_config(&config, &["exportResources"]).unwrap();
    let token = CancellationToken::new();
    token.cancel();
    let ctx = TaskContext::new(Arc::new(config), token);

    let err = tasks[0].execute(&ctx).await.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"task 'exportResources' was interrupted");
}

#[test]
fn test_task_event() {
    let mut event = TaskEvent::new("exportResources");
    assert_eq!(event.task(), "exportResources");
    assert!(event.is_cancelable());
    assert!(!event.is_canceled());

    let copy = event.copy();
    event.cancel();
    assert!(event.is_canceled());
    assert!(!copy.is_canceled());
    assert!(event.debug().starts_with("TaskEvent@"));
}
