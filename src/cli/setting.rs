// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the settings file commands.
//!
//! ```text
//! rub setting get <FILE> <KEY>
//! rub setting set <FILE> <KEY> <JSON>
//! rub convert <INPUT> <OUTPUT>
//!
//! FILE format from its extension: .json, .yml/.yaml, .toml
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `setting` command.
#[derive(Debug, Clone, Args)]
pub struct SettingArgs {
    #[command(subcommand)]
    pub action: SettingAction,
}

/// Setting operations.
#[derive(Debug, Clone, Subcommand)]
pub enum SettingAction {
    /// Prints a top-level value as JSON.
    Get {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Stores a top-level value, creating the file if needed.
    Set {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "KEY")]
        key: String,
        /// JSON value; plain text is stored as a string.
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// Arguments for the `convert` command.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}
