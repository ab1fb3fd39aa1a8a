// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ApiError, ApiResult, ConfigError, EventError, IdError};
use crate::event::HandlerPriority;

#[test]
fn test_config_error_display() {
    let err = ConfigError::UnsupportedFormat {
        extension: "ini".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"no provider for file type: 'ini'");
}

#[test]
fn test_not_monitorable_display() {
    let err = EventError::NotMonitorable { event: "Join" };
    insta::assert_snapshot!(
        err.to_string(),
        @"tried to register a handler on monitor level for the not monitorable event Join"
    );
}

#[test]
fn test_handler_failed_display() {
    let err = EventError::HandlerFailed {
        event: "Join",
        priority: HandlerPriority::Late,
        source: "boom".into(),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to process handler for Join at LATE level: boom");
}

#[test]
fn test_api_error_wraps_id_error() {
    let err: ApiError = IdError::InvalidNamespaced("nokey".to_string()).into();
    assert!(matches!(err, ApiError::Id(_)));
    insta::assert_snapshot!(err.to_string(), @"id error: invalid namespaced id: 'nokey'");
}

#[test]
fn test_api_error_size() {
    // All variants are boxed: discriminant + pointer
    let size = std::mem::size_of::<ApiError>();
    assert!(size <= 16, "ApiError is {size} bytes, expected <= 16");

    let size = std::mem::size_of::<ApiResult<()>>();
    assert!(size <= 16, "ApiResult<()> is {size} bytes, expected <= 16");
}
