// rub-common: Rubrion common library
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the project and task commands.

use clap::Args;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Tasks to run; all configured tasks when empty.
    /// Globs like 'export*' are supported.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows the source and destination of each task.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Only lists tasks matching these names or globs.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

/// Arguments for the `project` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Only shows dependencies that are published to consumers.
    #[arg(long)]
    pub published: bool,

    /// Fails if a module directory is missing.
    #[arg(long)]
    pub verify: bool,
}
