// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        project / run / setting
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-------------------+----'
//!                 |                   |
//!                 v                   v
//!              project              task
//!          modules, catalogs   registry, manager
//!          dependency scopes         |
//!                                    v
//!                              tasks (copy)
//!
//!   +-----------------------------------------+
//!   |  api (rub-api)  config readers, events, |
//!   |                 ids, provider registry  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub use rub_api as api;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod project;
pub mod task;
pub mod utility;
