// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, configs), list, project, run, setting (get, set, convert)
//! ```

pub mod config;
pub mod list;
pub mod project;
pub mod run;
pub mod setting;
