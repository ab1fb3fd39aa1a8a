// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for rub using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rub [global options] <command>
//! version
//! options
//! configs
//! project [--published]
//! list [patterns...]
//! run [tasks...]
//! setting {get|set}
//! convert <input> <output>
//! ```

pub mod global;
pub mod run;
pub mod setting;


use crate::cli::global::GlobalOptions;
use crate::cli::run::{ListArgs, ProjectArgs, RunArgs};
use crate::cli::setting::{ConvertArgs, SettingArgs};
use clap::{Parser, Subcommand};

/// Rubrion common project tooling
#[derive(Debug, Parser)]
#[command(
    name = "rub",
    author,
    version,
    about = "Rubrion common project tooling",
    long_about = "rub Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Inspects the rub-common project layout and runs its tasks.\n\n\
                  Invoking `rub run` runs every configured task. Do\n\
                  `rub run <task name>...` to run specific tasks. See\n\
                  `rub <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  rub starts from built-in defaults describing the rub-common\n\
                  project, then loads `rub.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config; they are\n\
                  loaded in order and override earlier ones. RUB_* environment\n\
                  variables and --set options are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration sources used by rub.
    Configs,

    /// Shows the resolved project layout.
    Project(ProjectArgs),

    /// Lists available tasks.
    List(ListArgs),

    /// Runs tasks.
    Run(RunArgs),

    /// Reads or writes a value in a settings file.
    Setting(SettingArgs),

    /// Converts a settings file to another format.
    Convert(ConvertArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
