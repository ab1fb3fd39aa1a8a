// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rubrion API module.
//!
//! # Crate Architecture
//!
//! ```text
//!        api (ApiModule, ApiProvider, ApiRegistry)
//!                        |
//!          +-------------+-------------+
//!          v                           v
//!   ,-------------,             ,-------------,
//!   |   config    |             |    event    |
//!   | readers     |             | EventBus    |
//!   | item mapper |             | executors   |
//!   | settings    |             | priorities  |
//!   '-------------'             '-------------'
//!          |                           |
//!          +-------------+-------------+
//!                        v
//!   +-----------------------------------------+
//!   |  foundation   error, id                 |
//!   +-----------------------------------------+
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod id;
